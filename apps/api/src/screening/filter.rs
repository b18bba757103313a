//! Filter Engine: reduces the working set to candidates meeting the must-haves.

use serde::{Deserialize, Serialize};

use crate::models::candidate::{Candidate, EducationLevel};
use crate::screening::normalize::{distinct_count, intersect_count, normalize};

/// Must-have requirements. `Default` is the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub min_years: f64,
    pub min_education: EducationLevel,
    /// Already-parsed terms, see `normalize::parse_term_list`.
    pub required_skills: Vec<String>,
    pub location_substring: String,
}

/// Returns the candidates satisfying every predicate, in input order.
pub fn filter<'a>(candidates: &'a [Candidate], criteria: &FilterCriteria) -> Vec<&'a Candidate> {
    let required = distinct_count(&criteria.required_skills);
    let location = normalize(&criteria.location_substring);
    let min_rank = criteria.min_education.rank();

    candidates
        .iter()
        .filter(|c| c.years_exp >= criteria.min_years)
        .filter(|c| c.top_education_rank() >= min_rank)
        // AND-match: every distinct required skill must be present
        .filter(|c| required == 0 || intersect_count(&criteria.required_skills, &c.skills) == required)
        .filter(|c| location.is_empty() || normalize(&c.location).contains(&location))
        .collect()
}
