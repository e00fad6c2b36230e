use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use super::common::read_source;
use super::{AliasMapBuilder, EntityExtractor, FeatureExtractor, Grammar};
use crate::core::{DependencyResolver, Entity, ExtractionConfig, LexicalResolver};

/// Turns one source file into fully enriched entities.
///
/// Stages run in a fixed order: entity classification, instances, methods,
/// aliases, then dependency resolution against the other entities of the
/// same file.
pub struct FilePipeline {
    config: ExtractionConfig,
    resolver: Box<dyn DependencyResolver>,
}

impl FilePipeline {
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            config,
            resolver: Box::new(LexicalResolver::new()),
        }
    }

    pub fn with_resolver(mut self, resolver: Box<dyn DependencyResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    pub fn process_file(&self, file_path: &Path, grammar: Grammar) -> Result<Vec<Entity>> {
        let source = read_source(file_path)?;
        self.process_source(file_path, source, grammar)
    }

    pub fn process_source(
        &self,
        file_path: &Path,
        source: Arc<str>,
        grammar: Grammar,
    ) -> Result<Vec<Entity>> {
        let mut parser = grammar.parser()?;
        let tree = parser.parse_source(&source, file_path)?;
        let root = tree.root_node();
        if root.has_error() {
            log::debug!(
                "{} contains syntax errors; extracting best-effort",
                file_path.display()
            );
        }

        let entities = EntityExtractor::new(&self.config);
        let features = FeatureExtractor::new(&self.config);

        let enriched: Vec<Entity> = entities
            .extract(&root, file_path, &source)
            .into_iter()
            .map(|found| {
                let entity = features.with_instances(found.entity, &found.node);
                let entity = features.with_methods(entity, &found.node);
                AliasMapBuilder::with_aliases(entity)
            })
            .collect();

        log::debug!(
            "resolving {} entities of {} with the {} resolver",
            enriched.len(),
            file_path.display(),
            self.resolver.strategy_name()
        );
        let dependencies = self.resolver.resolve_all(&enriched);
        let resolved = enriched
            .into_iter()
            .zip(dependencies)
            .map(|(entity, dependencies)| entity.with_dependencies(dependencies))
            .collect();

        Ok(resolved)
    }
}

impl Default for FilePipeline {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}
