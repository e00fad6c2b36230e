use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use tree_sitter::{Language, Node as TSNode, Parser, Tree};

pub struct TreeSitterParser {
    parser: Parser,
}

impl TreeSitterParser {
    pub fn new(language: Language) -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(language)?;
        Ok(Self { parser })
    }

    /// Parse a buffer; tolerant grammars still produce a tree for malformed input
    pub fn parse_source(&mut self, source: &str, file_path: &Path) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("Failed to parse file: {}", file_path.display()))
    }
}

/// Read a whole file into one shared, immutable buffer
pub fn read_source(file_path: &Path) -> Result<Arc<str>> {
    let file = File::open(file_path)
        .with_context(|| format!("failed to read {}", file_path.display()))?;
    let file_size = file.metadata().map(|m| m.len() as usize).unwrap_or(0);

    let mut reader = BufReader::with_capacity(file_size.clamp(1, 8192), file);
    let mut content = String::with_capacity(file_size);
    reader
        .read_to_string(&mut content)
        .with_context(|| format!("failed to read {}", file_path.display()))?;
    Ok(Arc::from(content))
}

pub fn extract_text<'a>(node: &TSNode, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

pub fn field_text<'a>(node: &TSNode, field: &str, source: &'a str) -> Option<&'a str> {
    node.child_by_field_name(field)
        .map(|child| extract_text(&child, source))
}

pub fn children<'tree>(node: &TSNode<'tree>) -> Vec<TSNode<'tree>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).collect()
}

pub fn named_children<'tree>(node: &TSNode<'tree>) -> Vec<TSNode<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

/// Depth-first, source-ordered descendants of `node` (excluding `node`),
/// driven by an explicit stack. `descend` decides whether a visited node's
/// own children are explored.
pub fn walk_descendants<'tree, F, D>(node: &TSNode<'tree>, mut descend: D, mut visit: F)
where
    D: FnMut(&TSNode<'tree>) -> bool,
    F: FnMut(&TSNode<'tree>),
{
    let mut stack: Vec<TSNode<'tree>> = children(node).into_iter().rev().collect();

    while let Some(current) = stack.pop() {
        visit(&current);
        if descend(&current) {
            stack.extend(children(&current).into_iter().rev());
        }
    }
}
