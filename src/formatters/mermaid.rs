use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::{Entity, Project};

/// Renders a project as a Mermaid `classDiagram`
pub struct MermaidFormatter {
    indent: &'static str,
}

impl MermaidFormatter {
    pub fn new() -> Self {
        Self { indent: "  " }
    }

    pub fn format_to_file(&self, project: &Project, output_path: &Path) -> Result<()> {
        let content = self.format_project(project);
        fs::write(output_path, content)
            .with_context(|| format!("failed to write {}", output_path.display()))?;
        Ok(())
    }

    pub fn format_project(&self, project: &Project) -> String {
        let mut lines = vec![
            "classDiagram".to_string(),
            format!("%% UML diagram for project \"{}\"", project.name),
        ];

        for entity in &project.entities {
            self.push_entity(entity, &mut lines);
        }

        for entity in &project.entities {
            for dependency in &entity.dependencies {
                lines.push(format!("{} --> {}", entity.name, dependency));
            }
        }

        lines.join("\n")
    }

    fn push_entity(&self, entity: &Entity, lines: &mut Vec<String>) {
        let indent = self.indent;
        lines.push(format!("class {} {{", entity.name));
        lines.push(format!("{indent}«{}»", entity.kind.as_str()));

        for param in &entity.params {
            lines.push(format!("{indent}+{param}"));
        }

        for method in &entity.methods {
            let params = method.params.join(", ");
            let returns = if method.returns.is_empty() {
                String::new()
            } else {
                format!(": {}", method.returns.join(", "))
            };
            lines.push(format!("{indent}+{}({params}){returns}", method.name));
        }

        lines.push("}".to_string());
    }
}

impl Default for MermaidFormatter {
    fn default() -> Self {
        Self::new()
    }
}
