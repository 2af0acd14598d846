//! Monthly accuracy trend
//!
//! Buckets qualifying thoughts by the calendar month they were *created*
//! and computes a per-month accuracy percentage: the share of thoughts
//! whose reality turned out at least as good as feared. Months are taken
//! from the UTC calendar (all stored timestamps are UTC); the rendering
//! layer may localize labels itself if it wants wall-clock months.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::types::Thought;

use super::qualifying;

/// Accuracy for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// First day of the bucket month; the ordering key
    pub month: NaiveDate,
    /// Short human label, e.g. "Mar 2025" (derived from `month`, never
    /// used for ordering)
    pub label: String,
    /// Share of the bucket where reality was at least as good as feared
    pub accuracy_pct: f64,
}

/// Per-month accuracy over the qualifying subset, chronologically
/// ascending.
///
/// Months with no qualifying thoughts are omitted rather than emitted as
/// empty buckets; an empty input yields an empty vec.
pub fn monthly_accuracy_trend(thoughts: &[Thought]) -> Vec<TrendPoint> {
    // (accurate, total) per month start; BTreeMap keeps buckets in
    // chronological order by the real date, not the label.
    let mut buckets: BTreeMap<NaiveDate, (usize, usize)> = BTreeMap::new();

    for q in qualifying(thoughts) {
        let created = q.thought.created_at.date_naive();
        let Some(month) = NaiveDate::from_ymd_opt(created.year(), created.month(), 1) else {
            continue;
        };
        let entry = buckets.entry(month).or_insert((0, 0));
        if q.at_least_as_good() {
            entry.0 += 1;
        }
        entry.1 += 1;
    }

    buckets
        .into_iter()
        .map(|(month, (accurate, total))| TrendPoint {
            month,
            label: month.format("%b %Y").to_string(),
            accuracy_pct: accurate as f64 / total as f64 * 100.0,
        })
        .collect()
}
