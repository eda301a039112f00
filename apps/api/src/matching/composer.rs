//! Score composition — folds keyword coverage and bonuses into one bounded match score.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Points awarded for covering every JD keyword.
    pub keyword_weight: f64,
    /// Points per core skill present in both the JD and the resume.
    pub core_skill_bonus: f64,
    pub resume_strength_bonus: f64,
    /// Unique resume tokens required (exclusive) before the strength bonus applies.
    pub resume_strength_min_tokens: usize,
    pub max_score: i64,
    pub ats_threshold: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            keyword_weight: 60.0,
            core_skill_bonus: 8.0,
            resume_strength_bonus: 10.0,
            resume_strength_min_tokens: 50,
            max_score: 95,
            ats_threshold: 60,
        }
    }
}

/// Counts the composer needs from the matching stages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInputs {
    pub matched_keywords: usize,
    pub target_keywords: usize,
    pub matched_core_skills: usize,
    pub resume_tokens: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub keyword_score: f64,
    pub core_skill_bonus: f64,
    pub resume_strength_bonus: f64,
    pub match_score: i64,
    pub ats_friendly: bool,
}

/// match_score = round(keyword coverage × weight + core bonus + strength bonus), capped
/// at `max_score`.
///
/// There is no lower clamp: a resume that matches nothing scores 0 (or 10 with the
/// strength bonus). A non-finite sum is reported as 0.
pub fn compose(inputs: &ScoreInputs, weights: &ScoreWeights) -> ScoreBreakdown {
    let keyword_score = if inputs.target_keywords > 0 {
        inputs.matched_keywords as f64 / inputs.target_keywords as f64 * weights.keyword_weight
    } else {
        0.0
    };
    let core_skill_bonus = inputs.matched_core_skills as f64 * weights.core_skill_bonus;
    let resume_strength_bonus = if inputs.resume_tokens > weights.resume_strength_min_tokens {
        weights.resume_strength_bonus
    } else {
        0.0
    };

    let raw = (keyword_score + core_skill_bonus + resume_strength_bonus).round();
    let match_score = if raw.is_finite() {
        (raw as i64).min(weights.max_score)
    } else {
        0
    };

    ScoreBreakdown {
        keyword_score,
        core_skill_bonus,
        resume_strength_bonus,
        match_score,
        ats_friendly: match_score >= weights.ats_threshold,
    }
}
