//! # umlscan
//!
//! Class-diagram extraction for JavaScript and TypeScript codebases.
//!
//! umlscan walks a directory, parses every `.js`, `.ts` and `.tsx` file with
//! tree-sitter and models each top-level declaration as an entity with its
//! methods, data members and same-file dependencies.
//!
//! ## Pipeline
//!
//! 1. `EntityExtractor` classifies top-level nodes (functions, classes,
//!    const-bound functions, other `const` bindings).
//! 2. `FeatureExtractor` discovers methods and instances in each body.
//! 3. `AliasMapBuilder` records locals instantiated with `new` and returned.
//! 4. A `DependencyResolver` links entities that mention each other.
//!
//! ## Output Formats
//!
//! - **Mermaid**: `classDiagram` text
//! - **JSON-Compact**: minimal-key JSON for programmatic consumption
//!
//! Dependency edges are inferred lexically and never cross file boundaries.

pub mod core;
pub mod formatters;
pub mod parsers;
