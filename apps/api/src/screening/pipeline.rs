//! Filter → Score → Rank for one screening request, plus candidate selection.
//!
//! The request carries the raw UI configuration (term lists as typed by the
//! user). It is parsed once into [`FilterCriteria`] and [`ScoreWeights`] so the
//! engines only ever see structured input.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::candidate::{null_as_default, Candidate, EducationLevel, ScoredCandidate};
use crate::screening::filter::{filter, FilterCriteria};
use crate::screening::normalize::parse_term_list;
use crate::screening::ranking::{rank, SortDirection};
use crate::screening::scoring::{score_all, ScoreWeights, DEFAULT_KEYWORDS};
use crate::screening::summary::{summarize, summarize_scored, SummaryBar};

/// Compare view shows at most this many candidates side by side.
pub const MAX_COMPARE: usize = 3;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeightsInput {
    pub experience: f64,
    pub skills: f64,
    pub education: f64,
    pub projects: f64,
    pub certifications: f64,
}

impl Default for WeightsInput {
    fn default() -> Self {
        let w = ScoreWeights::default();
        Self {
            experience: w.experience,
            skills: w.skills,
            education: w.education,
            projects: w.projects,
            certifications: w.certifications,
        }
    }
}

/// Absent and `null` fields both take their defaults, as with [`Candidate`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScreeningRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub min_years: f64,
    /// Level name; unknown names fall back to the lowest level.
    pub min_education: Option<String>,
    /// Raw comma-or-pipe list.
    #[serde(deserialize_with = "null_as_default")]
    pub required_skills: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub weights: WeightsInput,
    /// Raw comma-or-pipe list; `None` uses the default boost terms.
    pub keywords: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sort: SortDirection,
    /// Candidate ids picked in the table.
    #[serde(deserialize_with = "null_as_default")]
    pub selected: Vec<String>,
}

impl ScreeningRequest {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            min_years: self.min_years,
            min_education: self
                .min_education
                .as_deref()
                .and_then(EducationLevel::parse)
                .unwrap_or_default(),
            required_skills: parse_term_list(&self.required_skills),
            location_substring: self.location.clone(),
        }
    }

    pub fn weights(&self) -> ScoreWeights {
        ScoreWeights {
            experience: self.weights.experience,
            skills: self.weights.skills,
            education: self.weights.education,
            projects: self.weights.projects,
            certifications: self.weights.certifications,
            keyword_terms: parse_term_list(self.keywords.as_deref().unwrap_or(DEFAULT_KEYWORDS)),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreeningOutcome {
    pub loaded: SummaryBar,
    pub filtered: SummaryBar,
    pub scored: SummaryBar,
    pub ranked: Vec<ScoredCandidate>,
}

/// Runs the full pipeline over a working-set snapshot.
pub fn run(candidates: &[Candidate], request: &ScreeningRequest) -> ScreeningOutcome {
    let criteria = request.criteria();
    let weights = request.weights();

    let kept = filter(candidates, &criteria);
    let ranked = rank(score_all(kept.iter().copied(), &weights), request.sort);

    debug!(
        loaded = candidates.len(),
        kept = kept.len(),
        sort = ?request.sort,
        "Screening pipeline complete"
    );

    ScreeningOutcome {
        loaded: summarize("Loaded", candidates),
        filtered: summarize("After Filter", kept.iter().copied()),
        scored: summarize_scored("Scored", &ranked),
        ranked,
    }
}

/// Selected candidates in ranked order, or everything when nothing is selected.
pub fn select_for_print(ranked: Vec<ScoredCandidate>, selected: &[String]) -> Vec<ScoredCandidate> {
    if selected.is_empty() {
        return ranked;
    }
    ranked
        .into_iter()
        .filter(|s| selected.contains(&s.candidate.id))
        .collect()
}

/// First [`MAX_COMPARE`] selected candidates in ranked order. Nothing selected
/// means nothing to compare.
pub fn select_for_compare(ranked: Vec<ScoredCandidate>, selected: &[String]) -> Vec<ScoredCandidate> {
    ranked
        .into_iter()
        .filter(|s| selected.contains(&s.candidate.id))
        .take(MAX_COMPARE)
        .collect()
}
