//! Outcome comparator
//!
//! Aggregates expected vs. actual outcome counts across the qualifying
//! subset, in the three shapes the chart layer consumes: a fixed six-row
//! comparison, a sparse per-expectation breakdown, and a shared-denominator
//! percentage distribution.

use serde::Serialize;

use crate::types::{OutcomeType, Thought};

use super::qualifying;

/// Expected and actual counts for one scale position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeComparison {
    /// The scale position this row counts
    pub outcome_type: OutcomeType,
    /// Qualifying thoughts that expected this outcome
    pub expected_count: usize,
    /// Qualifying thoughts that actually landed on this outcome
    pub actual_count: usize,
}

/// Count of one actual outcome within an expectation group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActualCount {
    /// The actual outcome
    pub actual_type: OutcomeType,
    /// How many thoughts in the group landed on it
    pub count: usize,
}

/// Where reality landed for thoughts sharing one expected outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpectationGroup {
    /// The shared expected outcome
    pub expected_type: OutcomeType,
    /// Actual outcomes with non-zero counts, in ordinal order
    pub actual_breakdown: Vec<ActualCount>,
    /// Size of the group
    pub total_count: usize,
}

/// Expected/actual counts with percentages over the full qualifying subset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSlice {
    /// The scale position this row counts
    pub outcome_type: OutcomeType,
    /// Qualifying thoughts that expected this outcome
    pub expected_count: usize,
    /// `expected_count` as a percentage of the qualifying subset
    pub expected_pct: f64,
    /// Qualifying thoughts that actually landed on this outcome
    pub actual_count: usize,
    /// `actual_count` as a percentage of the qualifying subset
    pub actual_pct: f64,
}

/// Per-type counts over the qualifying subset, as (expected, actual)
/// arrays indexed by ordinal.
fn count_by_type(thoughts: &[Thought]) -> ([usize; 6], [usize; 6], usize) {
    let qualified = qualifying(thoughts);
    let mut expected = [0usize; 6];
    let mut actual = [0usize; 6];
    for q in &qualified {
        expected[q.expected.ordinal() as usize] += 1;
        actual[q.actual.ordinal() as usize] += 1;
    }
    (expected, actual, qualified.len())
}

/// Expected vs. actual counts for every scale position.
///
/// Always returns exactly six rows in ordinal order, zero counts included;
/// an empty (or all-unqualifying) input yields six zero rows.
pub fn compare_expected_vs_actual(thoughts: &[Thought]) -> Vec<OutcomeComparison> {
    let (expected, actual, _) = count_by_type(thoughts);
    OutcomeType::ALL
        .iter()
        .map(|&outcome_type| OutcomeComparison {
            outcome_type,
            expected_count: expected[outcome_type.ordinal() as usize],
            actual_count: actual[outcome_type.ordinal() as usize],
        })
        .collect()
}

/// For each expected outcome that occurs at all, where reality landed.
///
/// Unlike [`compare_expected_vs_actual`] this output is sparse: only
/// expectation groups with at least one qualifying thought appear, and
/// within a group only actual outcomes with non-zero counts are listed.
/// Both levels are in ordinal order.
pub fn expectation_to_reality_breakdown(thoughts: &[Thought]) -> Vec<ExpectationGroup> {
    let qualified = qualifying(thoughts);

    // matrix[expected][actual]
    let mut matrix = [[0usize; 6]; 6];
    for q in &qualified {
        matrix[q.expected.ordinal() as usize][q.actual.ordinal() as usize] += 1;
    }

    OutcomeType::ALL
        .iter()
        .filter_map(|&expected_type| {
            let row = &matrix[expected_type.ordinal() as usize];
            let total_count: usize = row.iter().sum();
            if total_count == 0 {
                return None;
            }
            let actual_breakdown = OutcomeType::ALL
                .iter()
                .filter_map(|&actual_type| {
                    let count = row[actual_type.ordinal() as usize];
                    (count > 0).then_some(ActualCount { actual_type, count })
                })
                .collect();
            Some(ExpectationGroup {
                expected_type,
                actual_breakdown,
                total_count,
            })
        })
        .collect()
}

/// Expected/actual percentages per scale position.
///
/// Percentages share one denominator: the size of the full qualifying
/// subset. Rows where both counts are zero are dropped, and an empty
/// qualifying subset yields an empty vec (no division ever happens on a
/// zero denominator).
pub fn distribution_percentages(thoughts: &[Thought]) -> Vec<DistributionSlice> {
    let (expected, actual, total) = count_by_type(thoughts);
    if total == 0 {
        return Vec::new();
    }

    OutcomeType::ALL
        .iter()
        .filter_map(|&outcome_type| {
            let i = outcome_type.ordinal() as usize;
            if expected[i] == 0 && actual[i] == 0 {
                return None;
            }
            Some(DistributionSlice {
                outcome_type,
                expected_count: expected[i],
                expected_pct: expected[i] as f64 / total as f64 * 100.0,
                actual_count: actual[i],
                actual_pct: actual[i] as f64 / total as f64 * 100.0,
            })
        })
        .collect()
}
