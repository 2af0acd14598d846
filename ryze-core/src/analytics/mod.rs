//! Analytics module for Ryze
//!
//! Pure reducers over a frozen snapshot of thought records:
//! - Outcome comparator (expected vs. actual charts)
//! - Monthly accuracy trend
//! - Positivity score
//! - Rule-based insight cards
//! - Static chart/score message catalog
//!
//! Every component applies the same precondition before computing
//! anything: only *qualifying* thoughts count (resolved, with both the
//! expected and the actual outcome recorded). The filter is defined once in
//! [`qualifying`] and shared, so no component can drift from the others.
//!
//! All functions here are total, synchronous, and side-effect free (the
//! insight generator and reflection lookup draw from a caller-supplied
//! random source). Callers are responsible for not mutating the input
//! collection during a call; the [`store`](crate::store) snapshots satisfy
//! that by construction.

pub mod comparator;
pub mod insights;
pub mod messages;
pub mod score;
pub mod trend;

pub use comparator::{
    compare_expected_vs_actual, distribution_percentages, expectation_to_reality_breakdown,
    ActualCount, DistributionSlice, ExpectationGroup, OutcomeComparison,
};
pub use insights::{generate_insights, InsightCard, ToneColor, ENCOURAGEMENTS};
pub use messages::{
    accuracy_color, accuracy_rating, chart_description, reflection_message, score_explanation,
    ChartKind,
};
pub use score::positivity_score;
pub use trend::{monthly_accuracy_trend, TrendPoint};

use crate::types::{OutcomeType, Thought};

/// A thought that passed the qualifying filter, with its expected/actual
/// pair pulled out so downstream code never re-unwraps the options.
pub(crate) struct Qualified<'a> {
    pub thought: &'a Thought,
    pub expected: OutcomeType,
    pub actual: OutcomeType,
}

impl Qualified<'_> {
    /// Ordinal improvement of reality over expectation (-5..=+5).
    pub fn improvement(&self) -> i32 {
        self.actual.ordinal() as i32 - self.expected.ordinal() as i32
    }

    /// Reality was at least as good as feared.
    pub fn at_least_as_good(&self) -> bool {
        self.actual.ordinal() >= self.expected.ordinal()
    }

    /// Reality was strictly better than feared.
    pub fn strictly_better(&self) -> bool {
        self.actual.ordinal() > self.expected.ordinal()
    }
}

/// The single shared qualifying-subset filter (see module docs).
pub(crate) fn qualifying(thoughts: &[Thought]) -> Vec<Qualified<'_>> {
    thoughts
        .iter()
        .filter_map(|thought| {
            thought.expected_actual().map(|(expected, actual)| Qualified {
                thought,
                expected,
                actual,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_qualifying_excludes_partial_records() {
        let mut resolved = Thought::new("A", Some(OutcomeType::Worse), None);
        resolved.resolve(OutcomeType::Good, Utc::now()).unwrap();

        let unresolved = Thought::new("B", Some(OutcomeType::Okay), None);

        let mut no_expectation = Thought::new("C", None, None);
        no_expectation.resolve(OutcomeType::Okay, Utc::now()).unwrap();

        let thoughts = vec![resolved, unresolved, no_expectation];
        let qualified = qualifying(&thoughts);

        assert_eq!(qualified.len(), 1);
        assert_eq!(qualified[0].expected, OutcomeType::Worse);
        assert_eq!(qualified[0].actual, OutcomeType::Good);
        assert_eq!(qualified[0].improvement(), 2);
        assert!(qualified[0].strictly_better());
    }
}
