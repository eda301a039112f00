//! Job recommender — ranks catalog postings by how much of each one the resume covers.

use serde::{Deserialize, Serialize};

use crate::catalog::JobRecord;
use crate::matching::tokenizer::{tokenize, TokenSet};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedJob {
    pub title: String,
    pub match_score: u32,
}

#[derive(Debug, Clone)]
pub struct RecommendOptions {
    /// Inclusive lower bound on a job's score.
    pub min_score: u32,
    pub limit: usize,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            min_score: 40,
            limit: 3,
        }
    }
}

/// Scores one job description against the resume set, or `None` when the
/// description has no usable tokens.
///
/// The numerator counts every description token (repeats included) found in the
/// resume while the denominator counts unique tokens, so a description that
/// repeats covered words can score above 100.
pub fn score_job(resume: &TokenSet, description: &str) -> Option<u32> {
    let job_words = tokenize(description);
    let job_set: TokenSet = job_words.iter().map(String::as_str).collect();
    if job_set.is_empty() {
        return None;
    }

    let matched_count = job_words.iter().filter(|w| resume.contains(w)).count();
    let score = (matched_count as f64 / job_set.len() as f64 * 100.0).round();
    Some(score as u32)
}

/// Top-scoring catalog jobs at or above `min_score`, best first.
/// Equal scores keep catalog order.
pub fn recommend(
    resume: &TokenSet,
    jobs: &[JobRecord],
    options: &RecommendOptions,
) -> Vec<RecommendedJob> {
    let mut results: Vec<RecommendedJob> = jobs
        .iter()
        .filter_map(|job| {
            score_job(resume, &job.description).map(|match_score| RecommendedJob {
                title: job.title.clone(),
                match_score,
            })
        })
        .filter(|job| job.match_score >= options.min_score)
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    results.truncate(options.limit);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: u32, title: &str, description: &str) -> JobRecord {
        JobRecord {
            id,
            title: title.to_string(),
            company: "Acme".to_string(),
            description: description.to_string(),
        }
    }

    fn resume(words: &[&str]) -> TokenSet {
        words.iter().copied().collect()
    }

    #[test]
    fn test_score_is_rounded_percentage() {
        // 2 of 3 tokens → 66.67 → 67
        let score = score_job(&resume(&["rust", "tokio"]), "rust tokio axum");
        assert_eq!(score, Some(67));
    }

    #[test]
    fn test_half_rounds_up() {
        // 1 of 8 → 12.5 → 13
        let score = score_job(
            &resume(&["aaa"]),
            "aaa bbb ccc ddd eee fff ggg hhh",
        );
        assert_eq!(score, Some(13));
    }

    #[test]
    fn test_repeated_words_can_exceed_hundred() {
        let score = score_job(&resume(&["rust"]), "rust rust rust");
        assert_eq!(score, Some(300));
    }

    #[test]
    fn test_empty_description_yields_no_score() {
        assert_eq!(score_job(&resume(&["rust"]), "the and with for UI UX"), None);
    }

    #[test]
    fn test_empty_description_job_never_recommended() {
        let jobs = vec![
            job(1, "Boilerplate", "The ideal candidate should join our team"),
            job(2, "Rust Dev", "rust tokio"),
        ];
        let results = recommend(&resume(&["rust", "tokio"]), &jobs, &RecommendOptions::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Rust Dev");
    }

    #[test]
    fn test_threshold_is_inclusive_and_ties_keep_catalog_order() {
        // Each description: 2 of 5 unique tokens covered → exactly 40.
        let jobs = vec![
            job(1, "First", "rust tokio alpha beta gamma"),
            job(2, "Below", "rust delta epsilon zeta theta"),
            job(3, "Second", "rust tokio kappa lambda sigma"),
        ];
        let results = recommend(&resume(&["rust", "tokio"]), &jobs, &RecommendOptions::default());

        assert_eq!(
            results,
            vec![
                RecommendedJob { title: "First".to_string(), match_score: 40 },
                RecommendedJob { title: "Second".to_string(), match_score: 40 },
            ]
        );
    }

    #[test]
    fn test_sorted_descending_and_capped_at_three() {
        let jobs = vec![
            job(1, "Serde", "rust tokio axum serde"),
            job(2, "Full", "rust tokio"),
            job(3, "Hyper", "rust tokio axum hyper"),
            job(4, "AlsoFull", "axum"),
            job(5, "Nothing", "cobol fortran"),
        ];
        let resume = resume(&["rust", "tokio", "axum"]);
        let results = recommend(&resume, &jobs, &RecommendOptions::default());

        assert_eq!(results.len(), 3);
        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Full", "AlsoFull", "Serde"]);
        assert!(results.windows(2).all(|w| w[0].match_score >= w[1].match_score));
        assert!(results.iter().all(|r| r.match_score >= 40));
    }

    #[test]
    fn test_embedded_catalog_recommends_frontend_for_react_resume() {
        let catalog = crate::catalog::JobCatalog::load(None).unwrap();
        let resume = TokenSet::from_text(
            "Frontend developer intern: HTML CSS JavaScript React responsive design REST API \
             integration basic concepts Git version control",
        );
        let results = recommend(&resume, catalog.jobs(), &RecommendOptions::default());

        assert_eq!(results[0].title, "Frontend Developer Intern");
        assert!(results.len() <= 3);
        assert!(results.iter().all(|r| r.match_score >= 40));
    }
}
