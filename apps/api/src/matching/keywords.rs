//! Keyword matching between a resume token set and a JD token set.

use serde::Serialize;

use crate::matching::tokenizer::TokenSet;

/// Skills weighted above ordinary keywords when both the JD and the resume mention them.
pub const CORE_SKILLS: &[&str] = &[
    "html",
    "css",
    "javascript",
    "react",
    "components",
    "state",
    "props",
    "hooks",
    "api",
];

/// Target tokens split by whether the source covers them. Both lists keep target order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeywordMatch {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Every target token counts once, regardless of how often or rarely it appears.
pub fn match_keywords(source: &TokenSet, target: &TokenSet) -> KeywordMatch {
    let (matched, missing): (Vec<&str>, Vec<&str>) =
        target.iter().partition(|token| source.contains(token));

    KeywordMatch {
        matched: matched.into_iter().map(String::from).collect(),
        missing: missing.into_iter().map(String::from).collect(),
    }
}

/// Core skills the JD asks for that the resume covers, in `CORE_SKILLS` order.
pub fn matched_core_skills(target: &TokenSet, resume: &TokenSet) -> Vec<&'static str> {
    CORE_SKILLS
        .iter()
        .copied()
        .filter(|skill| target.contains(skill) && resume.contains(skill))
        .collect()
}

/// Core skills the JD asks for that the resume lacks.
pub fn missing_core_skills(target: &TokenSet, resume: &TokenSet) -> Vec<&'static str> {
    CORE_SKILLS
        .iter()
        .copied()
        .filter(|skill| target.contains(skill) && !resume.contains(skill))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> TokenSet {
        words.iter().copied().collect()
    }

    #[test]
    fn test_partition_follows_target_order() {
        let source = set(&["react", "css", "python"]);
        let target = set(&["html", "react", "git", "css"]);

        let result = match_keywords(&source, &target);
        assert_eq!(result.matched, vec!["react", "css"]);
        assert_eq!(result.missing, vec!["html", "git"]);
    }

    #[test]
    fn test_empty_target_matches_nothing() {
        let result = match_keywords(&set(&["react"]), &TokenSet::default());
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_empty_source_misses_everything() {
        let target = set(&["rust", "tokio"]);
        let result = match_keywords(&TokenSet::default(), &target);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, vec!["rust", "tokio"]);
    }

    #[test]
    fn test_matched_and_missing_partition_target() {
        let cases = [
            ("react css api", "react html git css docker"),
            ("", "rust tokio"),
            ("python django", "python django"),
            ("kotlin", "the and with for"),
        ];
        for (source_text, target_text) in cases {
            let source = TokenSet::from_text(source_text);
            let target = TokenSet::from_text(target_text);
            let result = match_keywords(&source, &target);

            let matched: TokenSet = result.matched.iter().map(String::as_str).collect();
            let missing: TokenSet = result.missing.iter().map(String::as_str).collect();

            assert!(matched.iter().all(|t| !missing.contains(t)), "overlap for {target_text:?}");
            let union: TokenSet = matched.iter().chain(missing.iter()).collect();
            assert_eq!(union, target, "union differs for {target_text:?}");
        }
    }

    #[test]
    fn test_core_skills_require_both_sides() {
        let target = set(&["react", "api", "html", "docker"]);
        let resume = set(&["react", "api", "css"]);

        assert_eq!(matched_core_skills(&target, &resume), vec!["react", "api"]);
        assert_eq!(missing_core_skills(&target, &resume), vec!["html"]);
    }

    #[test]
    fn test_core_skills_follow_list_order() {
        let target = set(&["hooks", "api", "javascript"]);
        let resume = set(&["api", "hooks", "javascript"]);
        assert_eq!(
            matched_core_skills(&target, &resume),
            vec!["javascript", "hooks", "api"]
        );
    }
}
