use serde::{Deserialize, Serialize};

/// Heuristic knobs shared by the walker and the extractors
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Callee texts never recorded as return hints
    pub noop_callees: Vec<String>,
    /// Objects whose `Object.factory(...)` initialisers are framework boilerplate
    pub denied_factory_objects: Vec<String>,
    /// Case-sensitive file-name substring that makes a file yield no entities
    pub skip_file_marker: String,
    /// Directory names whose subtrees are never visited
    pub excluded_dirs: Vec<String>,
}

impl ExtractionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_noop_callee(mut self, callee: impl Into<String>) -> Self {
        self.noop_callees.push(callee.into());
        self
    }

    pub fn with_denied_factory_object(mut self, object: impl Into<String>) -> Self {
        self.denied_factory_objects.push(object.into());
        self
    }

    pub fn with_skip_file_marker(mut self, marker: impl Into<String>) -> Self {
        self.skip_file_marker = marker.into();
        self
    }

    pub fn with_excluded_dir(mut self, dir: impl Into<String>) -> Self {
        self.excluded_dirs.push(dir.into());
        self
    }

    pub fn is_noop_callee(&self, callee: &str) -> bool {
        self.noop_callees.iter().any(|c| c == callee)
    }

    pub fn is_denied_factory_object(&self, object: &str) -> bool {
        self.denied_factory_objects.iter().any(|o| o == object)
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    pub fn skips_file(&self, file_name: &str) -> bool {
        !self.skip_file_marker.is_empty() && file_name.contains(self.skip_file_marker.as_str())
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            noop_callees: vec!["console.log".to_string()],
            denied_factory_objects: vec!["StyleSheet".to_string()],
            skip_file_marker: "test".to_string(),
            excluded_dirs: vec!["node_modules".to_string()],
        }
    }
}
