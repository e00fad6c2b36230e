use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Syntactic shape an entity was registered from
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum EntityKind {
    FunctionDeclaration,
    ClassDeclaration,
    AbstractClassDeclaration,
    ArrowFunction,
    FunctionExpression,
    VariableDeclarator,
}

impl EntityKind {
    /// Map a tree-sitter node kind onto an entity kind
    pub fn from_node_kind(kind: &str) -> Option<Self> {
        match kind {
            "function_declaration" => Some(EntityKind::FunctionDeclaration),
            "class_declaration" => Some(EntityKind::ClassDeclaration),
            "abstract_class_declaration" => Some(EntityKind::AbstractClassDeclaration),
            "arrow_function" => Some(EntityKind::ArrowFunction),
            "function" | "function_expression" => Some(EntityKind::FunctionExpression),
            "variable_declarator" => Some(EntityKind::VariableDeclarator),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::FunctionDeclaration => "function_declaration",
            EntityKind::ClassDeclaration => "class_declaration",
            EntityKind::AbstractClassDeclaration => "abstract_class_declaration",
            EntityKind::ArrowFunction => "arrow_function",
            EntityKind::FunctionExpression => "function",
            EntityKind::VariableDeclarator => "variable_declarator",
        }
    }

    pub fn is_callable_initializer(kind: &str) -> bool {
        matches!(kind, "arrow_function" | "function" | "function_expression")
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Method {
    pub name: String,
    pub params: Vec<String>,
    pub returns: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: Vec::new(),
        }
    }

    /// Method carrying verbatim parameter-list and return-type text
    pub fn with_signature(name: &str, params: Option<&str>, returns: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            params: params.map(str::to_string).into_iter().collect(),
            returns: returns.map(str::to_string).into_iter().collect(),
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Return hints form an ordered set: a hint already present is not added twice
    pub fn with_return(mut self, hint: impl Into<String>) -> Self {
        let hint = hint.into();
        if !self.returns.contains(&hint) {
            self.returns.push(hint);
        }
        self
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Instance {
    pub name: String,
    pub type_text: String,
}

impl Instance {
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
        }
    }
}

/// A top-level declarable unit of one source file.
///
/// Entities are enriched through consuming `with_*` steps, each returning the
/// updated value, so a partially built entity is never shared.
#[derive(Debug, Clone, Serialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub path: PathBuf,
    pub name: String,
    #[serde(skip)]
    source: Arc<str>,
    pub span: Range<usize>,
    pub methods: Vec<Method>,
    pub instances: Vec<Instance>,
    pub dependencies: Vec<String>,
    pub params: Vec<String>,
    pub returns: Vec<String>,
    pub aliases: BTreeMap<String, String>,
}

impl Entity {
    pub fn register(
        kind: EntityKind,
        path: &Path,
        name: String,
        source: Arc<str>,
        span: Range<usize>,
    ) -> Self {
        Self {
            kind,
            path: path.to_path_buf(),
            name,
            source,
            span,
            methods: Vec::new(),
            instances: Vec::new(),
            dependencies: Vec::new(),
            params: Vec::new(),
            returns: Vec::new(),
            aliases: BTreeMap::new(),
        }
    }

    /// The whole buffer of the file this entity was found in
    pub fn source(&self) -> &Arc<str> {
        &self.source
    }

    /// Text of the defining node
    pub fn text(&self) -> &str {
        self.source.get(self.span.clone()).unwrap_or("")
    }

    pub fn with_params(mut self, params: Vec<String>) -> Self {
        self.params = params;
        self
    }

    pub fn with_returns(mut self, returns: Vec<String>) -> Self {
        self.returns = returns;
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods.extend(methods);
        self
    }

    pub fn with_instance(mut self, instance: Instance) -> Self {
        self.instances.push(instance);
        self
    }

    pub fn with_aliases(mut self, aliases: BTreeMap<String, String>) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<String>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

/// Aggregate of every entity found under one scan root
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub name: String,
    pub root: PathBuf,
    pub entities: Vec<Entity>,
}

impl Project {
    pub fn new(name: impl Into<String>, root: &Path) -> Self {
        Self {
            name: name.into(),
            root: root.to_path_buf(),
            entities: Vec::new(),
        }
    }

    /// Project named after the last segment of its root path
    pub fn from_root(root: &Path) -> Self {
        let name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.to_string_lossy().into_owned());
        Self::new(name, root)
    }

    pub fn with_entities(mut self, entities: impl IntoIterator<Item = Entity>) -> Self {
        self.entities.extend(entities);
        self
    }

    pub fn edge_count(&self) -> usize {
        self.entities.iter().map(|e| e.dependencies.len()).sum()
    }
}
