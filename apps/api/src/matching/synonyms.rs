//! Skill synonyms — widens a resume's vocabulary before it is matched against a JD.

use std::sync::LazyLock;

use indexmap::IndexMap;

use crate::matching::tokenizer::TokenSet;

/// Canonical skill → tokens that a JD may use for the same thing.
const SKILL_SYNONYMS: &[(&str, &[&str])] = &[
    ("react", &["reactjs", "frontend"]),
    ("javascript", &["js"]),
    ("api", &["rest", "restapi"]),
    ("component", &["components", "componentbased"]),
    ("state", &["statemanagement"]),
    ("hooks", &["reacthooks"]),
];

/// Process-wide skill synonym table, built on first use and never mutated.
pub static DEFAULT_SYNONYMS: LazyLock<SynonymMap> =
    LazyLock::new(|| SynonymMap::from_pairs(SKILL_SYNONYMS));

/// Flat, one-level synonym lookup. A synonym's own synonyms are never followed.
#[derive(Debug, Clone, Default)]
pub struct SynonymMap {
    entries: IndexMap<String, Vec<String>>,
}

impl SynonymMap {
    pub fn from_pairs(pairs: &[(&str, &[&str])]) -> Self {
        let entries = pairs
            .iter()
            .map(|(key, synonyms)| {
                (
                    key.to_string(),
                    synonyms.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    pub fn synonyms_of(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns `tokens` plus every synonym of each canonical key it contains.
pub fn expand(tokens: &TokenSet, map: &SynonymMap) -> TokenSet {
    let mut expanded = tokens.clone();
    for (key, synonyms) in &map.entries {
        if tokens.contains(key) {
            for synonym in synonyms {
                expanded.insert(synonym.as_str());
            }
        }
    }
    expanded
}
