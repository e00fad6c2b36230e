use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

use crate::core::Entity;

static INSTANTIATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"const\s+(\w+)\s*=\s*new\s+(\w+)\s*\(").expect("valid instantiation pattern")
});

static RETURNED_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"return\s*\{\s*([\w\s,]+)\s*\}").expect("valid return pattern"));

/// Lexical inference of "this factory exposes an instance of `T` as `x`".
///
/// An alias is kept only when it is both bound by `const x = new T(` and
/// listed in a `return { ... }` shorthand block of the same text. Matching
/// runs over the whole file buffer, so every entity of a file carries the
/// same map.
pub struct AliasMapBuilder;

impl AliasMapBuilder {
    pub fn with_aliases(entity: Entity) -> Entity {
        let aliases = Self::build(entity.source());
        entity.with_aliases(aliases)
    }

    pub fn build(text: &str) -> BTreeMap<String, String> {
        let instantiated: HashMap<&str, &str> = INSTANTIATION
            .captures_iter(text)
            .filter_map(|caps| Some((caps.get(1)?.as_str(), caps.get(2)?.as_str())))
            .collect();

        let mut aliases = BTreeMap::new();
        if instantiated.is_empty() {
            return aliases;
        }

        for block in RETURNED_OBJECT.captures_iter(text) {
            let Some(props) = block.get(1) else {
                continue;
            };
            for prop in props.as_str().split(',').map(str::trim) {
                if let Some(type_name) = instantiated.get(prop) {
                    aliases.insert(prop.to_string(), type_name.to_string());
                }
            }
        }

        aliases
    }
}
