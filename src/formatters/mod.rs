pub mod json_compact;
pub mod mermaid;

pub use json_compact::JsonCompactFormatter;
pub use mermaid::MermaidFormatter;
