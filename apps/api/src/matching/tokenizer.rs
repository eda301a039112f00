//! Tokenizer — turns raw document text into normalized keyword tokens.

use indexmap::IndexSet;

/// Filler words dropped from every document, including the job-posting boilerplate
/// ("looking", "required", "ideal", ...) that would otherwise dominate keyword lists.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "with", "for", "are", "this", "that", "will", "have", "has", "from", "your",
    "you", "looking", "experience", "knowledge", "skills", "responsibilities", "required",
    "preferred", "role", "job", "candidate", "ability", "title", "description", "hiring", "join",
    "our", "team", "ideal", "should", "seeking", "who", "solid", "foundation", "practical",
    "exposure", "strong",
];

/// Tokens this short carry no signal ("ui", "ux", "js").
const MIN_TOKEN_LEN: usize = 3;

/// Tokenizes `text` into lowercase, alphabetic-only words.
///
/// Hyphens split words; digits and punctuation are removed before splitting, so
/// "Node.js" becomes `nodejs` and "5+ years" becomes `years`. Order and duplicates
/// are preserved for callers that count occurrences.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' { ' ' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    normalized
        .split_whitespace()
        .filter(|word| word.len() >= MIN_TOKEN_LEN && !is_stop_word(word))
        .map(String::from)
        .collect()
}

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// A set of unique tokens that remembers first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet(IndexSet<String>);

impl TokenSet {
    pub fn from_text(text: &str) -> Self {
        tokenize(text).into_iter().collect()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    /// Returns `true` if the token was not already present.
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        self.0.insert(token.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_superset(&self, other: &TokenSet) -> bool {
        self.0.is_superset(&other.0)
    }
}

impl FromIterator<String> for TokenSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for TokenSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(String::from).collect())
    }
}
