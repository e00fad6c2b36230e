use std::path::Path;
use std::sync::Arc;
use umlscan::core::{Entity, EntityKind, Method, Project};
use umlscan::formatters::MermaidFormatter;

fn entity(kind: EntityKind, name: &str) -> Entity {
    Entity::register(kind, Path::new("proj/src/app.ts"), name.to_string(), Arc::from(""), 0..0)
}

#[test]
fn mermaid_snapshot_small_project() {
    let store = entity(EntityKind::ArrowFunction, "useStore")
        .with_params(vec!["api".to_string(), "logger".to_string()])
        .with_method(Method::new("load").with_return("api").with_return("parse"))
        .with_method(Method::with_signature(
            "save",
            Some("(x: number)"),
            Some(": void"),
        ))
        .with_method(Method::new("reset"))
        .with_dependencies(vec!["Store".to_string(), "Store".to_string()]);
    let plain = entity(EntityKind::ClassDeclaration, "Store");

    let project = Project::new("demo", Path::new("proj")).with_entities(vec![store, plain]);
    let out = MermaidFormatter::new().format_project(&project);

    let expected = "\
classDiagram
%% UML diagram for project \"demo\"
class useStore {
  «arrow_function»
  +api
  +logger
  +load(): api, parse
  +save((x: number)): : void
  +reset()
}
class Store {
  «class_declaration»
}
useStore --> Store
useStore --> Store";
    assert_eq!(out, expected);
}

#[test]
fn empty_project_renders_header_only() {
    let project = Project::new("empty", Path::new("empty"));
    let out = MermaidFormatter::new().format_project(&project);
    assert_eq!(out, "classDiagram\n%% UML diagram for project \"empty\"");
}
