use serde::{Deserialize, Serialize};

use crate::models::candidate::{Candidate, ScoredCandidate};

/// Headline numbers shown above each candidate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryBar {
    pub label: String,
    pub count: usize,
    /// Mean years of experience, one decimal. 0 for an empty set.
    pub avg_years: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_score: Option<f64>,
}

pub fn summarize<'a, I>(label: &str, candidates: I) -> SummaryBar
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let years: Vec<f64> = candidates.into_iter().map(|c| c.years_exp).collect();
    SummaryBar {
        label: label.to_string(),
        count: years.len(),
        avg_years: mean_tenths(&years),
        avg_score: None,
    }
}

pub fn summarize_scored(label: &str, scored: &[ScoredCandidate]) -> SummaryBar {
    let scores: Vec<f64> = scored.iter().map(|s| s.score).collect();
    SummaryBar {
        avg_score: (!scored.is_empty()).then(|| mean_tenths(&scores)),
        ..summarize(label, scored.iter().map(|s| &s.candidate))
    }
}

fn mean_tenths(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    (mean * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_years(years: f64) -> Candidate {
        Candidate {
            years_exp: years,
            ..Default::default()
        }
    }

    #[test]
    fn test_average_years() {
        let all = vec![with_years(3.0), with_years(6.0), with_years(1.0), with_years(4.0)];
        let bar = summarize("Loaded", &all);
        assert_eq!(bar.count, 4);
        assert_eq!(bar.avg_years, 3.5);
        assert_eq!(bar.avg_score, None);
    }

    #[test]
    fn test_empty_set_is_zero() {
        let bar = summarize("After Filter", Vec::<Candidate>::new().iter());
        assert_eq!(bar.count, 0);
        assert_eq!(bar.avg_years, 0.0);
    }

    #[test]
    fn test_scored_summary_includes_average_score() {
        let scored = vec![
            ScoredCandidate { candidate: with_years(1.0), score: 10.0 },
            ScoredCandidate { candidate: with_years(2.0), score: 15.5 },
        ];
        let bar = summarize_scored("Scored", &scored);
        assert_eq!(bar.avg_years, 1.5);
        assert_eq!(bar.avg_score, Some(12.8));
    }

    #[test]
    fn test_scored_summary_of_nothing_has_no_score() {
        assert_eq!(summarize_scored("Scored", &[]).avg_score, None);
    }
}
