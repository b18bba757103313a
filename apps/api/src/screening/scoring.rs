//! Scoring Engine: weighted relevance score per candidate.
//!
//! ```text
//! score = w.experience     * years
//!       + w.skills         * |skills|
//!       + w.education      * top_rank * 2
//!       + w.projects       * |projects|
//!       + w.certifications * |certifications|
//!       + 2 * distinct keyword hits
//! ```
//! rounded to one decimal. Weights are not range-checked; negative weights
//! penalize their sub-score.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::candidate::{Candidate, ScoredCandidate};
use crate::screening::normalize::{normalize, parse_term_list};

const EDUCATION_MULTIPLIER: f64 = 2.0;
const KEYWORD_BONUS: f64 = 2.0;
pub const DEFAULT_KEYWORDS: &str = "react, leadership, testing";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub experience: f64,
    pub skills: f64,
    pub education: f64,
    pub projects: f64,
    pub certifications: f64,
    /// Boost terms, matched as substrings. See [`keyword_hits`].
    pub keyword_terms: Vec<String>,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            experience: 3.0,
            skills: 4.0,
            education: 2.0,
            projects: 2.0,
            certifications: 1.0,
            keyword_terms: parse_term_list(DEFAULT_KEYWORDS),
        }
    }
}

/// Per-factor breakdown before weighting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubScores {
    pub experience: f64,
    pub skills: f64,
    pub education: f64,
    pub projects: f64,
    pub certifications: f64,
    pub keywords: f64,
}

pub fn sub_scores(candidate: &Candidate, keyword_terms: &[String]) -> SubScores {
    SubScores {
        experience: candidate.years_exp,
        skills: candidate.skills.len() as f64,
        education: candidate.top_education_rank() as f64 * EDUCATION_MULTIPLIER,
        projects: candidate.projects.len() as f64,
        certifications: candidate.certifications.len() as f64,
        keywords: keyword_hits(candidate, keyword_terms) as f64 * KEYWORD_BONUS,
    }
}

/// Computes the relevance score. Pure: the candidate is only read.
pub fn score(candidate: &Candidate, weights: &ScoreWeights) -> f64 {
    let s = sub_scores(candidate, &weights.keyword_terms);
    let weighted = weights.experience * s.experience
        + weights.skills * s.skills
        + weights.education * s.education
        + weights.projects * s.projects
        + weights.certifications * s.certifications
        + s.keywords;
    round_tenths(weighted)
}

/// Scores every candidate into a fresh `ScoredCandidate`, keeping input order.
pub fn score_all<'a, I>(candidates: I, weights: &ScoreWeights) -> Vec<ScoredCandidate>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    candidates
        .into_iter()
        .map(|candidate| ScoredCandidate {
            score: score(candidate, weights),
            candidate: candidate.clone(),
        })
        .collect()
}

/// Number of distinct keyword terms occurring anywhere in the summary,
/// project descriptions or skills. Each term counts once.
pub fn keyword_hits(candidate: &Candidate, keyword_terms: &[String]) -> usize {
    let haystack = std::iter::once(candidate.summary.as_str())
        .chain(
            candidate
                .projects
                .iter()
                .map(|p| p.description.as_deref().unwrap_or("")),
        )
        .chain(candidate.skills.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let terms: HashSet<String> = keyword_terms
        .iter()
        .map(|term| normalize(term))
        .filter(|term| !term.is_empty())
        .collect();
    terms
        .iter()
        .filter(|term| haystack.contains(term.as_str()))
        .count()
}

/// `round(x * 10) / 10`, half away from zero. Never yields `-0`.
fn round_tenths(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
