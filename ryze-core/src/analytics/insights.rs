//! Insight generation
//!
//! Inspects the qualifying subset and produces a short ordered list of
//! insight cards for the journal's overview screen. The rules are a fixed
//! decision table; only the closing encouragement text is randomized, and
//! the random source is injected so callers (and tests) control it.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::types::{OutcomeType, Thought};

use super::qualifying;

/// Color tag attached to a card for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneColor {
    Green,
    Teal,
    Orange,
    Red,
    Purple,
    Blue,
}

impl ToneColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneColor::Green => "green",
            ToneColor::Teal => "teal",
            ToneColor::Orange => "orange",
            ToneColor::Red => "red",
            ToneColor::Purple => "purple",
            ToneColor::Blue => "blue",
        }
    }
}

/// One card on the insights screen.
#[derive(Debug, Clone, Serialize)]
pub struct InsightCard {
    /// Card headline
    pub title: String,
    /// Body text; may interpolate computed percentages
    pub description: String,
    /// Icon tag for the rendering layer
    pub icon: &'static str,
    /// Color tag for the rendering layer
    pub color: ToneColor,
}

impl InsightCard {
    fn new(
        title: &str,
        description: impl Into<String>,
        icon: &'static str,
        color: ToneColor,
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            icon,
            color,
        }
    }
}

/// Fixed pool the "Growth Mindset" card draws from.
///
/// Public so tests can assert the chosen description is one of these.
pub const ENCOURAGEMENTS: [&str; 5] = [
    "Every resolved thought sharpens your sense of what is actually likely.",
    "Worries lose their grip once you write down how they really ended.",
    "Keep recording outcomes — patterns only show up over time.",
    "Noticing the gap between fear and reality is a skill, and you are practicing it.",
    "One thought at a time, you are building evidence against your worst-case instincts.",
];

/// Generate the ordered insight cards for a journal snapshot.
///
/// Rules, evaluated in order over the qualifying subset Q:
/// 1. Empty Q: a single onboarding card, nothing else.
/// 2. One outlook card based on the share of Q where reality was
///    *strictly* better than expected (>= 70%, >= 50%, below).
/// 3. With at least 5 qualifying thoughts and >= 70% of expectations at
///    `worst`/`worse`: a catastrophic-thinking card.
/// 4. Always one closing encouragement card, text drawn uniformly from
///    [`ENCOURAGEMENTS`] via the injected random source.
pub fn generate_insights<R: Rng + ?Sized>(thoughts: &[Thought], rng: &mut R) -> Vec<InsightCard> {
    let qualified = qualifying(thoughts);

    if qualified.is_empty() {
        return vec![InsightCard::new(
            "Begin Your Journey",
            "Record a worry, set a deadline, and resolve it to see how reality \
             compares with what you feared.",
            "🌅",
            ToneColor::Blue,
        )];
    }

    let total = qualified.len();
    let better_count = qualified.iter().filter(|q| q.strictly_better()).count();
    let better_pct = better_count as f64 / total as f64 * 100.0;

    tracing::debug!(qualifying = total, better_pct, "Generating insights");

    let mut cards = Vec::new();

    if better_pct >= 70.0 {
        cards.push(InsightCard::new(
            "Positive Reality",
            format!(
                "Reality turned out better than you feared in {}% of your resolved thoughts.",
                better_pct.round()
            ),
            "✨",
            ToneColor::Green,
        ));
    } else if better_pct >= 50.0 {
        cards.push(InsightCard::new(
            "Balanced Perspective",
            "About half of your worries ended better than expected — your outlook \
             tracks reality closely.",
            "⚖️",
            ToneColor::Teal,
        ));
    } else {
        cards.push(InsightCard::new(
            "Realistic Concerns",
            "Most outcomes matched or fell short of your expectations. Your worries \
             have been pointing at real risks.",
            "🌧",
            ToneColor::Orange,
        ));
    }

    if total >= 5 {
        let worst_expectations = qualified
            .iter()
            .filter(|q| matches!(q.expected, OutcomeType::Worst | OutcomeType::Worse))
            .count();
        let worst_pct = worst_expectations as f64 / total as f64 * 100.0;
        if worst_pct >= 70.0 {
            cards.push(InsightCard::new(
                "Catastrophic Thinking Pattern",
                format!(
                    "You expected the worst in {}% of your resolved thoughts. The \
                     record shows things usually end better than that.",
                    worst_pct.round()
                ),
                "⚠️",
                ToneColor::Red,
            ));
        }
    }

    let encouragement = ENCOURAGEMENTS
        .choose(rng)
        .copied()
        .unwrap_or(ENCOURAGEMENTS[0]);
    cards.push(InsightCard::new(
        "Growth Mindset",
        encouragement,
        "🌱",
        ToneColor::Purple,
    ));

    cards
}
