pub mod analyzer;
pub mod config;
pub mod model;
pub mod resolver;
pub mod scanner;

pub use analyzer::ProjectAnalyzer;
pub use config::ExtractionConfig;
pub use model::{Entity, EntityKind, Instance, Method, Project};
pub use resolver::{DependencyResolver, LexicalResolver};
pub use scanner::{FileInfo, FileScanner, TargetError};
