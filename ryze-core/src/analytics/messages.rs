//! Message catalog
//!
//! Static descriptive and reflective text keyed by chart type, plus band
//! lookups mapping scores and accuracy percentages to text and color tags.
//!
//! All band boundaries are half-open on the lower bound, with the top band
//! closed at 100. Inputs are expected to come from this crate's own
//! clamped producers; values outside [0, 100] are a caller contract
//! violation, asserted in debug builds and clamped into range in release
//! so the lookups stay total.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use super::insights::ToneColor;

/// The chart surfaces the analytics layer feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Six-row expected vs. actual comparison
    ExpectedVsActual,
    /// Per-expectation reality breakdown
    ExpectationBreakdown,
    /// Shared-denominator percentage distribution
    OutcomeDistribution,
    /// Monthly accuracy trend line
    AccuracyTrend,
}

impl ChartKind {
    /// Returns the identifier used in storage and chart routing
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::ExpectedVsActual => "expected_vs_actual",
            ChartKind::ExpectationBreakdown => "expectation_breakdown",
            ChartKind::OutcomeDistribution => "outcome_distribution",
            ChartKind::AccuracyTrend => "accuracy_trend",
        }
    }

    /// Returns the display name for this chart
    pub fn display_name(&self) -> &'static str {
        match self {
            ChartKind::ExpectedVsActual => "Expected vs. Actual",
            ChartKind::ExpectationBreakdown => "Expectation Breakdown",
            ChartKind::OutcomeDistribution => "Outcome Distribution",
            ChartKind::AccuracyTrend => "Accuracy Trend",
        }
    }
}

/// What a chart shows, for its header.
pub fn chart_description(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::ExpectedVsActual => {
            "Counts of what you expected against what actually happened, across \
             the full outcome scale."
        }
        ChartKind::ExpectationBreakdown => {
            "For each expectation you held, where reality actually landed."
        }
        ChartKind::OutcomeDistribution => {
            "How your expectations and outcomes spread across the scale, as \
             shares of all resolved thoughts."
        }
        ChartKind::AccuracyTrend => {
            "Month by month, how often reality turned out at least as good as \
             you feared."
        }
    }
}

/// A reflective prompt to show under a chart, drawn uniformly from a fixed
/// per-chart pool via the injected random source.
pub fn reflection_message<R: Rng + ?Sized>(kind: ChartKind, rng: &mut R) -> &'static str {
    let pool: &[&'static str] = match kind {
        ChartKind::ExpectedVsActual => &[
            "Where do the two bars drift apart the most?",
            "Which outcome do you predict most often — and how often are you right?",
            "Is the actual bar sitting higher on the scale than the expected one?",
        ],
        ChartKind::ExpectationBreakdown => &[
            "When you expect the worst, where does reality usually land?",
            "Pick one expectation group: what would past-you be surprised by?",
            "Do your most confident predictions hold up better than the rest?",
        ],
        ChartKind::OutcomeDistribution => &[
            "Is your expectation curve shifted toward the dark end of the scale?",
            "Which slice grew the most since you started journaling?",
            "If a friend showed you this spread, what would you tell them?",
        ],
        ChartKind::AccuracyTrend => &[
            "Is the line drifting upward as the months pass?",
            "What was different about your best month here?",
            "Dips happen — what do the low months have in common?",
        ],
    };
    pool.choose(rng).copied().unwrap_or(pool[0])
}

// Band lookups expect values produced by this crate's own clamped
// percentage/score functions.
fn checked_pct(value: f64) -> f64 {
    debug_assert!(
        (0.0..=100.0).contains(&value),
        "percentage out of range: {value}"
    );
    value.clamp(0.0, 100.0)
}

/// One-paragraph reading of a positivity score.
///
/// Bands: [0,30) [30,50) [50,70) [70,90) [90,100].
pub fn score_explanation(score: f64) -> &'static str {
    let score = checked_pct(score);
    if score < 30.0 {
        "Reality has been landing below your expectations. Be gentle with \
         yourself, and check whether the expectations were fair to begin with."
    } else if score < 50.0 {
        "Outcomes have trailed your expectations a little. Some of these \
         worries were pointing at real problems."
    } else if score < 70.0 {
        "Reality has roughly matched what you expected, with a slight \
         positive tilt."
    } else if score < 90.0 {
        "Things have been going noticeably better than you feared. Your \
         worries tend to overshoot."
    } else {
        "Almost everything turned out far better than you feared. Your worst \
         cases rarely happen."
    }
}

/// Short label for an accuracy percentage.
///
/// Bands: [0,20) [20,40) [40,60) [60,80) [80,100].
pub fn accuracy_rating(pct: f64) -> &'static str {
    let pct = checked_pct(pct);
    if pct < 20.0 {
        "Very low"
    } else if pct < 40.0 {
        "Low"
    } else if pct < 60.0 {
        "Moderate"
    } else if pct < 80.0 {
        "High"
    } else {
        "Very high"
    }
}

/// Color tag for an accuracy percentage, same bands as
/// [`accuracy_rating`].
pub fn accuracy_color(pct: f64) -> ToneColor {
    let pct = checked_pct(pct);
    if pct < 20.0 {
        ToneColor::Red
    } else if pct < 40.0 {
        ToneColor::Orange
    } else if pct < 60.0 {
        ToneColor::Blue
    } else if pct < 80.0 {
        ToneColor::Teal
    } else {
        ToneColor::Green
    }
}
