use anyhow::Result;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use crate::core::ExtractionConfig;
use crate::parsers::Grammar;

/// Rejections of the scan target before any file is read
#[derive(Debug, Error)]
pub enum TargetError {
    #[error("folder not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("path is not a folder: {}", .0.display())]
    NotADirectory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub grammar: Grammar,
}

pub struct FileScanner {
    config: ExtractionConfig,
}

impl FileScanner {
    pub fn new() -> Self {
        Self::with_config(ExtractionConfig::default())
    }

    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Resolve the scan target and make sure it is an existing directory
    pub fn validate_target(path: &Path) -> Result<PathBuf, TargetError> {
        let resolved = path
            .canonicalize()
            .map_err(|_| TargetError::NotFound(path.to_path_buf()))?;
        if !resolved.is_dir() {
            return Err(TargetError::NotADirectory(resolved));
        }
        Ok(resolved)
    }

    /// Walk `root` in file-name order, yielding every file with a routed grammar.
    ///
    /// Excluded directories are pruned before descent and the root itself is
    /// never yielded. Files matching the skip marker are still listed; the
    /// analyzer is responsible for giving them zero entities.
    pub fn scan_directory(&self, root_path: &Path) -> Result<Vec<FileInfo>> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root_path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_excluded(entry));

        for entry in walker {
            let entry = entry?;
            if entry.depth() == 0 || !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(grammar) = Grammar::from_path(path) else {
                log::debug!("skipping {} (no grammar)", path.display());
                continue;
            };

            files.push(FileInfo {
                path: path.to_path_buf(),
                file_name: entry.file_name().to_string_lossy().into_owned(),
                grammar,
            });
        }

        Ok(files)
    }

    fn is_excluded(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .map(|name| self.config.is_excluded_dir(name))
                .unwrap_or(false)
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}
