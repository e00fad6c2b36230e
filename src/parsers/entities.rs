use std::path::Path;
use std::sync::Arc;
use tree_sitter::Node as TSNode;

use super::common::{children, extract_text, field_text};
use super::features::{parameter_names, return_keys};
use crate::core::{Entity, EntityKind, ExtractionConfig};

/// An entity paired with the tree node that defines it, alive only while the
/// file's tree is.
#[derive(Debug, Clone)]
pub struct Discovered<'tree> {
    pub entity: Entity,
    pub node: TSNode<'tree>,
}

/// Classifies top-level program nodes into entities
pub struct EntityExtractor<'cfg> {
    config: &'cfg ExtractionConfig,
}

impl<'cfg> EntityExtractor<'cfg> {
    pub fn new(config: &'cfg ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn extract<'tree>(
        &self,
        root: &TSNode<'tree>,
        file_path: &Path,
        source: &Arc<str>,
    ) -> Vec<Discovered<'tree>> {
        let mut found = Vec::new();

        for child in children(root) {
            if !Self::is_top_level(&child) {
                continue;
            }

            if child.kind() == "export_statement" {
                for sub in children(&child) {
                    // `export { Foo }` style re-exports carry no declaration
                    if sub.kind() == "identifier" {
                        continue;
                    }
                    found.extend(self.classify(sub, file_path, source));
                }
            } else {
                found.extend(self.classify(child, file_path, source));
            }
        }

        found
    }

    fn is_top_level(node: &TSNode) -> bool {
        node.parent().map(|p| p.kind() == "program").unwrap_or(false)
    }

    fn classify<'tree>(
        &self,
        node: TSNode<'tree>,
        file_path: &Path,
        source: &Arc<str>,
    ) -> Option<Discovered<'tree>> {
        match node.kind() {
            "function_declaration" | "class_declaration" | "abstract_class_declaration" => {
                Some(Self::register(node, file_path, source))
            }
            "lexical_declaration" | "variable_declaration" => {
                self.classify_declaration(&node, file_path, source)
            }
            _ => None,
        }
    }

    fn register<'tree>(
        node: TSNode<'tree>,
        file_path: &Path,
        source: &Arc<str>,
    ) -> Discovered<'tree> {
        let name = field_text(&node, "name", source).unwrap_or("").to_string();
        Self::register_named(node, name, file_path, source)
    }

    fn register_named<'tree>(
        node: TSNode<'tree>,
        name: String,
        file_path: &Path,
        source: &Arc<str>,
    ) -> Discovered<'tree> {
        let kind =
            EntityKind::from_node_kind(node.kind()).unwrap_or(EntityKind::VariableDeclarator);
        let entity = Entity::register(kind, file_path, name, source.clone(), node.byte_range());
        Discovered { entity, node }
    }

    /// Only the first named declarator of a statement is considered; whatever
    /// it yields (an entity or nothing) ends the statement.
    fn classify_declaration<'tree>(
        &self,
        node: &TSNode<'tree>,
        file_path: &Path,
        source: &Arc<str>,
    ) -> Option<Discovered<'tree>> {
        for declarator in children(node) {
            if declarator.kind() != "variable_declarator" {
                continue;
            }
            let Some(name_node) = declarator.child_by_field_name("name") else {
                continue;
            };

            let value = declarator.child_by_field_name("value");
            return match value {
                Some(value) if EntityKind::is_callable_initializer(value.kind()) => {
                    let name = extract_text(&name_node, source).to_string();
                    Some(Self::register_const_function(value, name, file_path, source))
                }
                _ if self.is_denied_factory_call(value.as_ref(), source) => {
                    log::debug!(
                        "skipping framework initialiser {} in {}",
                        extract_text(&name_node, source),
                        file_path.display()
                    );
                    None
                }
                _ => Some(Self::register(declarator, file_path, source)),
            };
        }
        None
    }

    fn register_const_function<'tree>(
        value: TSNode<'tree>,
        name: String,
        file_path: &Path,
        source: &Arc<str>,
    ) -> Discovered<'tree> {
        let params = parameter_names(&value, source);
        let returns = value
            .child_by_field_name("body")
            .map(|body| return_keys(&body, source, &params))
            .unwrap_or_default();

        let mut discovered = Self::register_named(value, name, file_path, source);
        discovered.entity = discovered.entity.with_params(params).with_returns(returns);
        discovered
    }

    /// `StyleSheet.create({...})` and similar: a call whose callee is a member
    /// access on a deny-listed object
    fn is_denied_factory_call(&self, value: Option<&TSNode>, source: &str) -> bool {
        let Some(value) = value else {
            return false;
        };
        if value.kind() != "call_expression" {
            return false;
        }
        value
            .child_by_field_name("function")
            .filter(|callee| callee.kind() == "member_expression")
            .and_then(|callee| field_text(&callee, "object", source))
            .map(|object| self.config.is_denied_factory_object(object))
            .unwrap_or(false)
    }
}
