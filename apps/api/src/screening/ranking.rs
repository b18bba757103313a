use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::candidate::ScoredCandidate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Orders scored candidates by score only. The sort is stable, so equal
/// scores keep their input order in both directions.
pub fn rank(mut scored: Vec<ScoredCandidate>, direction: SortDirection) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| {
        let ord = a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    scored
}
