//! Match scoring — the full resume-vs-JD pipeline behind a pluggable trait.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`. The default backend is
//! `KeywordMatchScorer`: lexical, deterministic, no I/O.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{JobCatalog, JobRecord};
use crate::errors::AppError;
use crate::matching::composer::{compose, ScoreInputs, ScoreWeights};
use crate::matching::keywords::{match_keywords, matched_core_skills, missing_core_skills};
use crate::matching::recommender::{recommend, RecommendOptions, RecommendedJob};
use crate::matching::synonyms::{expand, DEFAULT_SYNONYMS};
use crate::matching::tokenizer::TokenSet;

/// Resume text shorter than this almost always means extraction failed upstream.
pub const MIN_RESUME_CHARS: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub match_score: i64,
    pub ats_friendly: bool,
    pub keywords_found: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub recommended_jobs: Vec<RecommendedJob>,
}

// ────────────────────────────────────────────────────────────────────────────
// Options
// ────────────────────────────────────────────────────────────────────────────

/// Which resume token set a stage compares against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Tokens exactly as they appear in the resume.
    #[default]
    Raw,
    /// Resume tokens plus their skill synonyms.
    Expanded,
}

#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Resume set used for keyword and core-skill matching against the target JD.
    pub scoring_mode: MatchMode,
    /// Resume set used when scoring catalog jobs for recommendations.
    pub recommendation_mode: MatchMode,
    pub weights: ScoreWeights,
    pub recommend: RecommendOptions,
    /// Maximum entries in `keywords_found` / `missing_keywords`.
    pub display_limit: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            scoring_mode: MatchMode::Expanded,
            recommendation_mode: MatchMode::Raw,
            weights: ScoreWeights::default(),
            recommend: RecommendOptions::default(),
            display_limit: 10,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching handlers.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(
        &self,
        resume_text: &str,
        job_description: &str,
        catalog: &JobCatalog,
    ) -> Result<MatchResult, AppError>;
}

#[derive(Debug, Clone, Default)]
pub struct KeywordMatchScorer {
    pub options: MatchOptions,
}

#[async_trait]
impl MatchScorer for KeywordMatchScorer {
    async fn score(
        &self,
        resume_text: &str,
        job_description: &str,
        catalog: &JobCatalog,
    ) -> Result<MatchResult, AppError> {
        compute_match(resume_text, job_description, catalog.jobs(), &self.options)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Rejects requests the pipeline cannot score meaningfully.
pub fn validate_inputs(resume_text: &str, job_description: &str) -> Result<(), AppError> {
    if resume_text.trim().is_empty() || job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Resume and job description are required".to_string(),
        ));
    }
    if resume_text.chars().count() < MIN_RESUME_CHARS {
        return Err(AppError::Validation(
            "Unable to extract resume text".to_string(),
        ));
    }
    Ok(())
}

pub fn compute_match(
    resume_text: &str,
    job_description: &str,
    jobs: &[JobRecord],
    options: &MatchOptions,
) -> Result<MatchResult, AppError> {
    validate_inputs(resume_text, job_description)?;

    let resume_set = TokenSet::from_text(resume_text);
    let expanded_set = expand(&resume_set, &DEFAULT_SYNONYMS);
    let target_set = TokenSet::from_text(job_description);

    let (raw, expanded) = (&resume_set, &expanded_set);
    let select = move |mode: MatchMode| match mode {
        MatchMode::Raw => raw,
        MatchMode::Expanded => expanded,
    };

    let recommended_jobs = recommend(
        select(options.recommendation_mode),
        jobs,
        &options.recommend,
    );

    let scoring_set = select(options.scoring_mode);
    let keywords = match_keywords(scoring_set, &target_set);
    let matched_core = matched_core_skills(&target_set, scoring_set);
    let missing_core = missing_core_skills(&target_set, scoring_set);

    let breakdown = compose(
        &ScoreInputs {
            matched_keywords: keywords.matched.len(),
            target_keywords: target_set.len(),
            matched_core_skills: matched_core.len(),
            resume_tokens: resume_set.len(),
        },
        &options.weights,
    );

    debug!(
        keyword_score = breakdown.keyword_score,
        core_skill_bonus = breakdown.core_skill_bonus,
        resume_strength_bonus = breakdown.resume_strength_bonus,
        ?matched_core,
        ?missing_core,
        "Composed match score"
    );
    info!(
        match_score = breakdown.match_score,
        ats_friendly = breakdown.ats_friendly,
        resume_tokens = resume_set.len(),
        target_tokens = target_set.len(),
        recommendations = recommended_jobs.len(),
        "Resume scored"
    );

    let limit = options.display_limit;
    Ok(MatchResult {
        match_score: breakdown.match_score,
        ats_friendly: breakdown.ats_friendly,
        keywords_found: keywords.matched.into_iter().take(limit).collect(),
        missing_keywords: keywords.missing.into_iter().take(limit).collect(),
        recommended_jobs,
    })
}
