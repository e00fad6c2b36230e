use tree_sitter::Node as TSNode;

use super::common::{children, extract_text, field_text, named_children, walk_descendants};
use crate::core::{Entity, EntityKind, ExtractionConfig, Instance, Method};

fn is_function_like(kind: &str) -> bool {
    matches!(
        kind,
        "arrow_function"
            | "function"
            | "function_expression"
            | "function_declaration"
            | "generator_function"
            | "generator_function_declaration"
            | "method_definition"
    )
}

fn is_variable_declaration(kind: &str) -> bool {
    matches!(kind, "lexical_declaration" | "variable_declaration")
}

fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

/// Discovers methods and data members inside an entity's body
pub struct FeatureExtractor<'cfg> {
    config: &'cfg ExtractionConfig,
}

impl<'cfg> FeatureExtractor<'cfg> {
    pub fn new(config: &'cfg ExtractionConfig) -> Self {
        Self { config }
    }

    pub fn with_instances(&self, entity: Entity, node: &TSNode) -> Entity {
        let Some(body) = node.child_by_field_name("body") else {
            return entity;
        };
        let source = entity.source().clone();
        let mut entity = entity;

        for child in children(&body) {
            match child.kind() {
                "public_field_definition" => {
                    let name = field_text(&child, "name", &source);
                    let type_text = field_text(&child, "type", &source);
                    if let (Some(name), Some(type_text)) = (name, type_text) {
                        entity = entity.with_instance(Instance::new(name, type_text));
                    }
                }
                kind if is_variable_declaration(kind) => {
                    for declarator in children(&child) {
                        if declarator.kind() != "variable_declarator" {
                            continue;
                        }
                        let name = declarator.child_by_field_name("name");
                        let value = declarator.child_by_field_name("value");
                        if let (Some(name), Some(value)) = (name, value) {
                            if !EntityKind::is_callable_initializer(value.kind()) {
                                entity = entity.with_instance(Instance::new(
                                    extract_text(&name, &source),
                                    extract_text(&value, &source),
                                ));
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        entity
    }

    pub fn with_methods(&self, entity: Entity, node: &TSNode) -> Entity {
        match node.child_by_field_name("body") {
            Some(body) => {
                let methods = self.discover_methods(&body, entity.source());
                entity.with_methods(methods)
            }
            None => entity,
        }
    }

    /// Method discovery over the direct statements of `body`
    pub fn discover_methods(&self, body: &TSNode, source: &str) -> Vec<Method> {
        let mut methods = Vec::new();

        for child in children(body) {
            match child.kind() {
                "abstract_method_signature" => {
                    if let Some(name) = field_text(&child, "name", source) {
                        methods.push(Method::with_signature(
                            name,
                            field_text(&child, "parameters", source),
                            field_text(&child, "return_type", source),
                        ));
                    }
                }
                "method_definition" => {
                    let Some(name) = field_text(&child, "name", source) else {
                        continue;
                    };
                    if child.child_by_field_name("return_type").is_some() {
                        methods.push(Method::with_signature(
                            name,
                            field_text(&child, "parameters", source),
                            field_text(&child, "return_type", source),
                        ));
                    } else if name != "constructor" {
                        methods.push(self.infer_method(name, &child, source));
                    }
                }
                "expression_statement" => {
                    self.discover_call_statement(&child, source, &mut methods);
                }
                kind if is_variable_declaration(kind) => {
                    self.discover_function_bindings(&child, source, &mut methods);
                }
                _ => {}
            }
        }

        methods
    }

    /// `register(args)` becomes a method; when an argument is an array, the
    /// arrow functions inside it are searched for further methods.
    fn discover_call_statement(
        &self,
        statement: &TSNode,
        source: &str,
        methods: &mut Vec<Method>,
    ) {
        let Some(call) = statement
            .named_child(0)
            .filter(|expr| expr.kind() == "call_expression")
        else {
            return;
        };
        let Some(callee) = field_text(&call, "function", source) else {
            return;
        };
        let arguments = call.child_by_field_name("arguments");
        let arrays: Vec<TSNode> = arguments
            .map(|args| named_children(&args))
            .unwrap_or_default()
            .into_iter()
            .filter(|arg| arg.kind() == "array")
            .collect();

        if arrays.is_empty() {
            let params = arguments.map(|args| extract_text(&args, source));
            methods.push(Method::with_signature(callee, params, None));
            return;
        }

        methods.push(Method::new(callee));
        for array in arrays {
            for element in named_children(&array) {
                if element.kind() != "arrow_function" {
                    continue;
                }
                if let Some(body) = element.child_by_field_name("body") {
                    methods.extend(self.discover_methods(&body, source));
                }
            }
        }
    }

    fn discover_function_bindings(
        &self,
        declaration: &TSNode,
        source: &str,
        methods: &mut Vec<Method>,
    ) {
        for declarator in children(declaration) {
            if declarator.kind() != "variable_declarator" {
                continue;
            }
            let Some(name) = field_text(&declarator, "name", source) else {
                continue;
            };
            let Some(value) = declarator
                .child_by_field_name("value")
                .filter(|value| EntityKind::is_callable_initializer(value.kind()))
            else {
                continue;
            };

            if value.child_by_field_name("return_type").is_some() {
                methods.push(Method::with_signature(
                    name,
                    field_text(&value, "parameters", source),
                    field_text(&value, "return_type", source),
                ));
            } else {
                methods.push(self.infer_method(name, &value, source));
            }
        }
    }

    /// Heuristic signature for a function without a declared return type.
    ///
    /// Every distinct callee reached from `function` becomes a return hint,
    /// and typed parameters of `function` itself become parameters. Nested
    /// variable declarations are not entered; parameters of nested functions
    /// are ignored. Traversal uses an explicit stack.
    pub fn infer_method(&self, name: &str, function: &TSNode, source: &str) -> Method {
        let mut method = Method::new(name);
        let mut stack: Vec<(TSNode, bool)> = children(function)
            .into_iter()
            .rev()
            .map(|child| (child, false))
            .collect();

        while let Some((node, nested)) = stack.pop() {
            match node.kind() {
                kind if is_variable_declaration(kind) => continue,
                "required_parameter" => {
                    if !nested {
                        method = method.with_param(extract_text(&node, source));
                    }
                    continue;
                }
                "call_expression" => {
                    if let Some(callee) = field_text(&node, "function", source) {
                        if !self.config.is_noop_callee(callee) {
                            method = method.with_return(callee);
                        }
                    }
                }
                _ => {}
            }

            let nested = nested || is_function_like(node.kind());
            stack.extend(children(&node).into_iter().rev().map(|child| (child, nested)));
        }

        method
    }
}

/// Declared parameter names of a const-bound function: plain identifiers and
/// the identifiers of a one-level object destructuring, deduplicated.
pub fn parameter_names(function: &TSNode, source: &str) -> Vec<String> {
    if let Some(single) = function.child_by_field_name("parameter") {
        return vec![extract_text(&single, source).to_string()];
    }
    let Some(parameters) = function.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut names = Vec::new();
    for child in children(&parameters) {
        match child.kind() {
            "required_parameter" => {
                if let Some(pattern) = child.child_by_field_name("pattern") {
                    collect_pattern_names(&pattern, source, &mut names);
                }
            }
            "identifier" | "object_pattern" => collect_pattern_names(&child, source, &mut names),
            _ => {}
        }
    }

    dedup_in_order(names)
}

fn collect_pattern_names(pattern: &TSNode, source: &str, names: &mut Vec<String>) {
    match pattern.kind() {
        "identifier" => names.push(extract_text(pattern, source).to_string()),
        "object_pattern" => {
            for prop in named_children(pattern) {
                if matches!(
                    prop.kind(),
                    "identifier" | "shorthand_property_identifier_pattern"
                ) {
                    names.push(extract_text(&prop, source).to_string());
                }
            }
        }
        _ => {}
    }
}

/// Return hints of a const-bound function: keys of returned object literals,
/// plus calls into one of its own parameters. Deduplicated, first-seen order.
pub fn return_keys(body: &TSNode, source: &str, params: &[String]) -> Vec<String> {
    let mut keys = Vec::new();

    let mut visit = |node: &TSNode| match node.kind() {
        "return_statement" => {
            let argument = named_children(node)
                .into_iter()
                .find(|child| child.kind() != "comment");
            if let Some(object) = argument.filter(|arg| arg.kind() == "object") {
                for prop in named_children(&object) {
                    match prop.kind() {
                        "pair" => {
                            if let Some(key) = field_text(&prop, "key", source) {
                                keys.push(key.to_string());
                            }
                        }
                        "shorthand_property_identifier" | "identifier" => {
                            keys.push(extract_text(&prop, source).to_string());
                        }
                        _ => {}
                    }
                }
            }
        }
        "call_expression" => {
            if let Some(callee) = field_text(node, "function", source) {
                if params.iter().any(|p| p == callee) {
                    keys.push(callee.to_string());
                }
            }
        }
        _ => {}
    };

    visit(body);
    walk_descendants(body, |_| true, &mut visit);

    dedup_in_order(keys)
}
