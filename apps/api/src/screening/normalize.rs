//! Text normalization shared by filtering and scoring.
//!
//! Every textual comparison in the screener goes through [`normalize`]:
//! trim surrounding whitespace, then lowercase.

use std::collections::HashSet;

/// Characters accepted as separators in raw term lists ("react, node | css").
const TERM_SEPARATORS: [char; 2] = [',', '|'];

pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Splits a raw comma-or-pipe list into distinct normalized terms, keeping
/// first-seen order and dropping blanks.
pub fn parse_term_list(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.split(TERM_SEPARATORS.as_slice())
        .map(normalize)
        .filter(|term| !term.is_empty())
        .filter(|term| seen.insert(term.clone()))
        .collect()
}

/// Counts the distinct normalized `needles` present in `haystack`.
///
/// Duplicates on either side never inflate the count, so the result is at
/// most the number of distinct needles.
pub fn intersect_count<A, B>(needles: &[A], haystack: &[B]) -> usize
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    let available: HashSet<String> = haystack.iter().map(|s| normalize(s.as_ref())).collect();
    let wanted: HashSet<String> = needles
        .iter()
        .map(|s| normalize(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect();
    wanted.intersection(&available).count()
}

/// Number of distinct non-blank normalized terms.
pub fn distinct_count<A: AsRef<str>>(terms: &[A]) -> usize {
    terms
        .iter()
        .map(|s| normalize(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect::<HashSet<_>>()
        .len()
}
