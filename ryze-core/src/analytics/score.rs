//! Positivity score
//!
//! Reduces the qualifying subset to one normalized 0-100 number: did
//! reality outperform expectation on average? 50 means expectations
//! matched reality, 100 means every thought landed five steps better than
//! feared, 0 is the symmetric opposite.

use crate::types::{OutcomeType, Thought};

use super::qualifying;

/// Normalized average ordinal improvement across the qualifying subset.
///
/// Returns exactly 0.0 for an empty qualifying subset (a defined edge
/// case, not an error), otherwise
/// `clamp(50 + total_improvement / (n * 5) * 50, 0, 100)`.
pub fn positivity_score(thoughts: &[Thought]) -> f64 {
    let qualified = qualifying(thoughts);
    if qualified.is_empty() {
        return 0.0;
    }

    let total_improvement: i32 = qualified.iter().map(|q| q.improvement()).sum();
    let max_possible = qualified.len() as i32 * OutcomeType::MAX_ORDINAL_SPAN;

    let raw = 50.0 + total_improvement as f64 / max_possible as f64 * 50.0;
    raw.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn resolved(expected: OutcomeType, actual: OutcomeType) -> Thought {
        let mut thought = Thought::new("t", Some(expected), None);
        thought.resolve(actual, Utc::now()).unwrap();
        thought
    }

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(positivity_score(&[]), 0.0);
        // Unresolved-only input is the same edge case.
        let open = vec![Thought::new("open", Some(OutcomeType::Worst), None)];
        assert_eq!(positivity_score(&open), 0.0);
    }

    #[test]
    fn test_symmetry_extremes() {
        let max: Vec<Thought> = (0..4)
            .map(|_| resolved(OutcomeType::Worst, OutcomeType::Best))
            .collect();
        assert_eq!(positivity_score(&max), 100.0);

        let min: Vec<Thought> = (0..4)
            .map(|_| resolved(OutcomeType::Best, OutcomeType::Worst))
            .collect();
        assert_eq!(positivity_score(&min), 0.0);

        let flat: Vec<Thought> = (0..4)
            .map(|_| resolved(OutcomeType::Good, OutcomeType::Good))
            .collect();
        assert_eq!(positivity_score(&flat), 50.0);
    }

    #[test]
    fn test_mixed_journal() {
        // 7 thoughts three steps better, 3 exactly as expected:
        // 50 + (21 / 50) * 50 = 71.
        let mut thoughts: Vec<Thought> = (0..7)
            .map(|_| resolved(OutcomeType::Worst, OutcomeType::Good))
            .collect();
        thoughts.extend((0..3).map(|_| resolved(OutcomeType::Okay, OutcomeType::Okay)));

        assert_eq!(positivity_score(&thoughts), 71.0);
    }

    #[test]
    fn test_score_stays_in_bounds() {
        let combos: Vec<Thought> = OutcomeType::ALL
            .iter()
            .flat_map(|&e| OutcomeType::ALL.iter().map(move |&a| resolved(e, a)))
            .collect();
        let score = positivity_score(&combos);
        assert!((0.0..=100.0).contains(&score));
        // Full cross product is symmetric around no-change.
        assert_eq!(score, 50.0);
    }
}
