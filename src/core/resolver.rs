use regex::Regex;

use crate::core::Entity;

/// Strategy computing the dependency edges of one entity against the other
/// entities of its file.
pub trait DependencyResolver {
    fn resolve(&self, subject: &Entity, siblings: &[Entity]) -> Vec<String>;

    /// Edges for every entity of one file, in input order
    fn resolve_all(&self, entities: &[Entity]) -> Vec<Vec<String>> {
        entities
            .iter()
            .map(|subject| self.resolve(subject, entities))
            .collect()
    }

    fn strategy_name(&self) -> &str;
}

/// Whole-word matchers for one sibling: its own name and every alias it
/// exposes, paired with the alias' real type.
struct SiblingMatchers<'a> {
    name: &'a str,
    name_matcher: Option<Regex>,
    alias_matchers: Vec<(&'a str, Regex)>,
}

/// Name-based resolver: an edge exists when a sibling's name, or an alias a
/// sibling exposes, occurs as a whole word in the subject's text.
///
/// Matching covers comments and string literals too, so false positives are
/// expected. Duplicate edges are kept.
#[derive(Debug, Clone, Default)]
pub struct LexicalResolver;

impl LexicalResolver {
    pub fn new() -> Self {
        Self
    }

    fn word_matcher(word: &str) -> Option<Regex> {
        if word.is_empty() {
            return None;
        }
        match Regex::new(&format!(r"\b{}\b", regex::escape(word))) {
            Ok(re) => Some(re),
            Err(err) => {
                log::warn!("cannot build matcher for '{word}': {err}");
                None
            }
        }
    }

    fn compile(siblings: &[Entity]) -> Vec<SiblingMatchers<'_>> {
        siblings
            .iter()
            .map(|other| SiblingMatchers {
                name: &other.name,
                name_matcher: Self::word_matcher(&other.name),
                alias_matchers: other
                    .aliases
                    .iter()
                    .filter_map(|(alias, real_type)| {
                        Self::word_matcher(alias).map(|re| (real_type.as_str(), re))
                    })
                    .collect(),
            })
            .collect()
    }

    fn resolve_compiled(subject: &Entity, matchers: &[SiblingMatchers]) -> Vec<String> {
        let text = subject.text();
        let mut dependencies = Vec::new();

        for other in matchers {
            if other.name == subject.name {
                continue;
            }

            if other.name_matcher.as_ref().is_some_and(|re| re.is_match(text)) {
                dependencies.push(other.name.to_string());
            }

            for (real_type, re) in &other.alias_matchers {
                if *real_type != subject.name && re.is_match(text) {
                    dependencies.push(real_type.to_string());
                }
            }
        }

        dependencies
    }
}

impl DependencyResolver for LexicalResolver {
    fn resolve(&self, subject: &Entity, siblings: &[Entity]) -> Vec<String> {
        Self::resolve_compiled(subject, &Self::compile(siblings))
    }

    fn resolve_all(&self, entities: &[Entity]) -> Vec<Vec<String>> {
        let matchers = Self::compile(entities);
        entities
            .iter()
            .map(|subject| Self::resolve_compiled(subject, &matchers))
            .collect()
    }

    fn strategy_name(&self) -> &str {
        "lexical"
    }
}
