use anyhow::{Context, Result};
use serde_json::json;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::{EntityKind, Project};

/// JSON rendering of a project with file paths interned and short keys
pub struct JsonCompactFormatter {
    /// Emit only names and edges, without members
    minimal: bool,
}

impl JsonCompactFormatter {
    pub fn new() -> Self {
        Self { minimal: false }
    }

    pub fn minimal() -> Self {
        Self { minimal: true }
    }

    pub fn format_to_file(&self, project: &Project, output_path: &Path) -> Result<()> {
        let json_content = self.format_project(project)?;
        fs::write(output_path, json_content)
            .with_context(|| format!("failed to write {}", output_path.display()))?;
        Ok(())
    }

    pub fn format_project(&self, project: &Project) -> Result<String> {
        let mut file_map: HashMap<String, usize> = HashMap::new();
        let mut files: Vec<String> = Vec::new();
        let mut entities = Vec::with_capacity(project.entities.len());
        let mut edges = Vec::new();

        for (index, entity) in project.entities.iter().enumerate() {
            let path = entity.path.to_string_lossy().into_owned();
            let file_id = *file_map.entry(path.clone()).or_insert_with(|| {
                files.push(path);
                files.len() - 1
            });

            let mut entity_json = json!({
                "n": entity.name,
                "k": self.kind_code(entity.kind),
                "f": file_id,
            });

            if !self.minimal {
                entity_json["params"] = json!(entity.params);
                entity_json["returns"] = json!(entity.returns);
                entity_json["methods"] = entity
                    .methods
                    .iter()
                    .map(|m| json!([m.name, m.params, m.returns]))
                    .collect();
                entity_json["instances"] = entity
                    .instances
                    .iter()
                    .map(|i| json!([i.name, i.type_text]))
                    .collect();
                entity_json["aliases"] = json!(entity.aliases);
            }

            entities.push(entity_json);

            for dependency in &entity.dependencies {
                edges.push(json!([index, dependency]));
            }
        }

        let output = json!({
            "meta": {
                "project": project.name,
                "root": project.root.to_string_lossy(),
                "entities": project.entities.len(),
                "edges": edges.len(),
                "format": if self.minimal { "minimal" } else { "compact" }
            },
            "files": files,
            "entities": entities,
            "edges": edges
        });

        Ok(serde_json::to_string(&output)?)
    }

    fn kind_code(&self, kind: EntityKind) -> u8 {
        match kind {
            EntityKind::FunctionDeclaration => 0,
            EntityKind::ClassDeclaration => 1,
            EntityKind::AbstractClassDeclaration => 2,
            EntityKind::ArrowFunction => 3,
            EntityKind::FunctionExpression => 4,
            EntityKind::VariableDeclarator => 5,
        }
    }
}

impl Default for JsonCompactFormatter {
    fn default() -> Self {
        Self::new()
    }
}
