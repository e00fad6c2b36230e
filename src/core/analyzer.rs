use anyhow::Result;
use std::path::Path;

use super::{DependencyResolver, ExtractionConfig, FileScanner, Project};
use crate::parsers::FilePipeline;

/// Builds a `Project` from every recognised file under a root directory.
///
/// Files are processed one at a time in walk order; any read failure aborts
/// the whole run.
pub struct ProjectAnalyzer {
    file_scanner: FileScanner,
    pipeline: FilePipeline,
}

impl ProjectAnalyzer {
    pub fn new() -> Self {
        Self::with_config(ExtractionConfig::default())
    }

    pub fn with_config(config: ExtractionConfig) -> Self {
        Self {
            file_scanner: FileScanner::with_config(config.clone()),
            pipeline: FilePipeline::new(config),
        }
    }

    pub fn with_resolver(mut self, resolver: Box<dyn DependencyResolver>) -> Self {
        self.pipeline = self.pipeline.with_resolver(resolver);
        self
    }

    pub fn analyze(&self, root_path: &Path) -> Result<Project> {
        self.analyze_into(Project::from_root(root_path), root_path)
    }

    pub fn analyze_into(&self, project: Project, root_path: &Path) -> Result<Project> {
        let files = self.file_scanner.scan_directory(root_path)?;
        log::info!("found {} candidate files under {}", files.len(), root_path.display());

        let mut project = project;
        for file_info in &files {
            if self.pipeline.config().skips_file(&file_info.file_name) {
                log::debug!("skipping {} (file name marker)", file_info.path.display());
                continue;
            }

            log::debug!(
                "extracting {} as {}",
                file_info.path.display(),
                file_info.grammar.as_str()
            );
            let entities = self.pipeline.process_file(&file_info.path, file_info.grammar)?;
            project = project.with_entities(entities);
        }

        log::info!(
            "extracted {} entities and {} dependency edges",
            project.entities.len(),
            project.edge_count()
        );
        Ok(project)
    }
}

impl Default for ProjectAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
