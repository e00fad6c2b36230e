pub mod aliases;
pub mod common;
pub mod entities;
pub mod features;
pub mod pipeline;

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use tree_sitter::Language;

pub use aliases::AliasMapBuilder;
pub use entities::EntityExtractor;
pub use features::FeatureExtractor;
pub use pipeline::FilePipeline;

use common::TreeSitterParser;

/// Grammar selected for a source file by its extension
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Grammar {
    JavaScript,
    TypeScript,
    Tsx,
}

impl Grammar {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str())? {
            "tsx" => Some(Grammar::Tsx),
            "ts" => Some(Grammar::TypeScript),
            "js" => Some(Grammar::JavaScript),
            _ => None,
        }
    }

    pub fn language(self) -> Language {
        match self {
            Grammar::JavaScript => tree_sitter_javascript::language(),
            Grammar::TypeScript => tree_sitter_typescript::language_typescript(),
            Grammar::Tsx => tree_sitter_typescript::language_tsx(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grammar::JavaScript => "javascript",
            Grammar::TypeScript => "typescript",
            Grammar::Tsx => "tsx",
        }
    }

    pub fn parser(self) -> Result<TreeSitterParser> {
        TreeSitterParser::new(self.language())
    }
}
