//! Partial-credit comparison of a respondent's priority assignment against a
//! fixed ideal-importance vector.
//!
//! This is a per-option closeness score, not a rank correlation: position `i`
//! earns 1.0 when the respondent's priority equals the ideal weight, 0.5 when
//! the two differ by exactly one, and nothing otherwise. Ideal vectors may
//! repeat weights, and the respondent's assignment need not be a permutation.

const EXACT_MATCH: f64 = 1.0;
const NEAR_MATCH: f64 = 0.5;

/// Score `respondent` against `ideal` over their common prefix.
///
/// The result lies in `0.0..=min(respondent.len(), ideal.len())`.
pub fn ranking_similarity(respondent: &[i64], ideal: &[i64]) -> f64 {
    respondent
        .iter()
        .zip(ideal)
        .map(|(&given, &target)| match given.abs_diff(target) {
            0 => EXACT_MATCH,
            1 => NEAR_MATCH,
            _ => 0.0,
        })
        .sum()
}
