use std::path::Path;
use std::sync::Arc;
use umlscan::core::{Entity, EntityKind, Instance};
use umlscan::parsers::{FilePipeline, Grammar};

fn extract(code: &str) -> Vec<Entity> {
    FilePipeline::default()
        .process_source(Path::new("sample.ts"), Arc::from(code), Grammar::TypeScript)
        .unwrap()
}

fn names(entities: &[Entity]) -> Vec<&str> {
    entities.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn exported_function_declaration_is_a_bare_entity() {
    let entities = extract("export function Foo(){}");

    assert_eq!(entities.len(), 1);
    let foo = &entities[0];
    assert_eq!(foo.name, "Foo");
    assert_eq!(foo.kind, EntityKind::FunctionDeclaration);
    assert!(foo.dependencies.is_empty());
    assert!(foo.methods.is_empty());
}

#[test]
fn top_level_declarations_are_classified_in_source_order() {
    let code = r#"
import { X } from './x';

interface Shape { area(): number }

class Plain {}
export class Exported {}
export abstract class Base {}
function helper() {}
const arrow = () => {};
const expr = function () {};
let settings = loadSettings();

if (ready) {
  function nested() {}
}
"#;
    let entities = extract(code);

    assert_eq!(
        names(&entities),
        vec!["Plain", "Exported", "Base", "helper", "arrow", "expr", "settings"]
    );
    let kinds: Vec<EntityKind> = entities.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntityKind::ClassDeclaration,
            EntityKind::ClassDeclaration,
            EntityKind::AbstractClassDeclaration,
            EntityKind::FunctionDeclaration,
            EntityKind::ArrowFunction,
            EntityKind::FunctionExpression,
            EntityKind::VariableDeclarator,
        ]
    );
}

#[test]
fn bare_re_exports_are_skipped() {
    let code = r#"
const answer = compute();
export { answer };
export default answer;
"#;
    let entities = extract(code);
    assert_eq!(names(&entities), vec!["answer"]);
}

#[test]
fn stylesheet_factories_are_not_entities() {
    let code = r#"
const styles = StyleSheet.create({ container: { flex: 1 } });
const theme = Theme.create({ dark: true });
const config = makeConfig();
"#;
    let entities = extract(code);
    assert_eq!(names(&entities), vec!["theme", "config"]);
}

#[test]
fn only_first_declarator_of_a_statement_is_classified() {
    let entities = extract("const a = 1, b = () => {};");
    assert_eq!(names(&entities), vec!["a"]);
    assert_eq!(entities[0].kind, EntityKind::VariableDeclarator);

    // A filtered first declarator hides the function that follows it
    let entities = extract("const styles = StyleSheet.create({}), helper = () => {};");
    assert!(entities.is_empty());
}

#[test]
fn const_function_params_and_return_keys_are_computed_at_registration() {
    let code = r#"
export const useStore = ({ api, logger }, extra: number) => {
  const value = api();
  logger.info(value);
  return { load: value, save };
};
"#;
    let entities = extract(code);
    assert_eq!(entities.len(), 1);

    let store = &entities[0];
    assert_eq!(store.kind, EntityKind::ArrowFunction);
    assert_eq!(store.params, vec!["api", "logger", "extra"]);
    assert_eq!(store.returns, vec!["api", "load", "save"]);
}

#[test]
fn single_identifier_arrow_parameter_is_recorded() {
    let entities = extract("const twice = n => { return { n }; };");
    assert_eq!(entities[0].params, vec!["n"]);
    assert_eq!(entities[0].returns, vec!["n"]);
}

#[test]
fn const_function_without_instantiation_has_no_aliases() {
    let entities = extract("const Bar = () => { return { x: 1 } }");
    assert_eq!(entities.len(), 1);
    assert!(entities[0].aliases.is_empty());
    assert_eq!(entities[0].returns, vec!["x"]);
}

#[test]
fn malformed_input_still_yields_best_effort_entities() {
    let entities = extract("class Good {}\nfunction broken( {\n");
    assert!(entities.iter().any(|e| e.name == "Good"));
}

#[test]
fn javascript_grammar_is_supported() {
    let code = r#"
function helper() {}
class Widget {
  render() { return helper(); }
}
module.exports = { Widget };
"#;
    let entities = FilePipeline::default()
        .process_source(Path::new("widget.js"), Arc::from(code), Grammar::JavaScript)
        .unwrap();

    assert_eq!(names(&entities), vec!["helper", "Widget"]);
    let widget = &entities[1];
    assert_eq!(widget.methods.len(), 1);
    assert_eq!(widget.methods[0].name, "render");
    assert_eq!(widget.methods[0].returns, vec!["helper"]);
    assert_eq!(widget.dependencies, vec!["helper"]);
}

#[test]
fn top_level_var_statements_are_classified() {
    let code = r#"
var legacy = function () {
  var cache = {};
  helper();
};
var count = 1;
"#;
    let entities = extract(code);

    assert_eq!(names(&entities), vec!["legacy", "count"]);
    assert_eq!(entities[0].kind, EntityKind::FunctionExpression);
    assert_eq!(entities[1].kind, EntityKind::VariableDeclarator);

    let legacy = &entities[0];
    let methods: Vec<&str> = legacy.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(methods, vec!["helper"]);
    assert_eq!(legacy.instances, vec![Instance::new("cache", "{}")]);
    assert!(entities[1].methods.is_empty());
}
