//! Core domain types for Ryze
//!
//! These types model the journal's canonical records: a worrying
//! [`Thought`], its spectrum of possible [`Outcome`]s, and the fixed
//! six-point [`OutcomeType`] scale every comparison is measured on.
//!
//! ## Terminology
//!
//! | Term | Definition |
//! |------|------------|
//! | **Thought** | A worry the journaler records, with an expected outcome and a deadline |
//! | **Outcome** | One described point on a thought's spectrum, owned by that thought |
//! | **OutcomeType** | The fixed worst..best scale; its ordinal is the sole basis for better/worse arithmetic |
//! | **Qualifying thought** | Resolved with both expected and actual outcome set; the universal analytics filter |
//!
//! A thought is created active/unresolved and transitions exactly once to
//! resolved via [`Thought::resolve`]. The deadline can be rescheduled any
//! number of times before that. Analytics never look at unresolved or
//! partially specified records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

// ============================================
// Outcome scale
// ============================================

/// The six-point outcome spectrum, ordered worst to best.
///
/// The declaration order *is* the scale: [`OutcomeType::ordinal`] is the
/// single canonical mapping used for every better/worse comparison in the
/// crate. No other weighting is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeType {
    Worst,
    Worse,
    Okay,
    Good,
    Better,
    Best,
}

impl OutcomeType {
    /// All six types in ordinal order.
    pub const ALL: [OutcomeType; 6] = [
        OutcomeType::Worst,
        OutcomeType::Worse,
        OutcomeType::Okay,
        OutcomeType::Good,
        OutcomeType::Better,
        OutcomeType::Best,
    ];

    /// Largest possible ordinal distance on the scale (worst -> best).
    pub const MAX_ORDINAL_SPAN: i32 = 5;

    /// The 0-5 position of this type on the scale.
    ///
    /// This is the only place ordinal arithmetic is defined; every
    /// analytics component goes through it.
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Inverse of [`OutcomeType::ordinal`].
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Returns the identifier used in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeType::Worst => "worst",
            OutcomeType::Worse => "worse",
            OutcomeType::Okay => "okay",
            OutcomeType::Good => "good",
            OutcomeType::Better => "better",
            OutcomeType::Best => "best",
        }
    }

    /// Returns the display name for this outcome type
    pub fn display_name(&self) -> &'static str {
        match self {
            OutcomeType::Worst => "Worst case",
            OutcomeType::Worse => "Worse than expected",
            OutcomeType::Okay => "Okay",
            OutcomeType::Good => "Good",
            OutcomeType::Better => "Better than expected",
            OutcomeType::Best => "Best case",
        }
    }
}

impl std::fmt::Display for OutcomeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutcomeType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "worst" => Ok(OutcomeType::Worst),
            "worse" => Ok(OutcomeType::Worse),
            "okay" => Ok(OutcomeType::Okay),
            "good" => Ok(OutcomeType::Good),
            "better" => Ok(OutcomeType::Better),
            "best" => Ok(OutcomeType::Best),
            _ => Err(format!("unknown outcome type: {}", s)),
        }
    }
}

// ============================================
// Outcome
// ============================================

/// One described point on a thought's spectrum.
///
/// Owned exclusively by its parent [`Thought`]: created when the thought is
/// authored or edited, replaced on edit, never shared across thoughts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    /// Unique identifier
    pub id: String,
    /// Where this outcome sits on the scale
    pub outcome_type: OutcomeType,
    /// The journaler's description of this outcome
    pub description: String,
}

impl Outcome {
    /// Create a new outcome with a generated id.
    pub fn new(outcome_type: OutcomeType, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            outcome_type,
            description: description.into(),
        }
    }
}

// ============================================
// Thought
// ============================================

/// A recorded worry: the aggregate root of the journal.
///
/// The `outcomes` spectrum is sparse (0..=6 entries, intended one per
/// [`OutcomeType`] but not enforced); analytics never assume all six are
/// present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thought {
    /// Unique identifier
    pub id: String,
    /// The worrying question being journaled
    pub question: String,
    /// When the thought was recorded
    pub created_at: DateTime<Utc>,
    /// Described points on the spectrum (sparse)
    pub outcomes: Vec<Outcome>,
    /// The outcome the journaler expects
    pub expected_outcome: Option<OutcomeType>,
    /// When the thought should be revisited
    pub deadline: Option<DateTime<Utc>>,
    /// What actually happened (set on resolution)
    pub actual_outcome: Option<OutcomeType>,
    /// Whether the thought has been resolved
    pub is_resolved: bool,
    /// When the thought was resolved
    pub resolution_date: Option<DateTime<Utc>>,
    /// When a deadline reminder was last delivered
    pub last_notification_date: Option<DateTime<Utc>>,
}

impl Thought {
    /// Create a new active, unresolved thought.
    pub fn new(
        question: impl Into<String>,
        expected_outcome: Option<OutcomeType>,
        deadline: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            question: question.into(),
            created_at: Utc::now(),
            outcomes: Vec::new(),
            expected_outcome,
            deadline,
            actual_outcome: None,
            is_resolved: false,
            resolution_date: None,
            last_notification_date: None,
        }
    }

    /// Add a described outcome to the spectrum.
    pub fn add_outcome(&mut self, outcome_type: OutcomeType, description: impl Into<String>) {
        self.outcomes.push(Outcome::new(outcome_type, description));
    }

    /// Look up the described outcome for a scale position, if any.
    pub fn outcome_for(&self, outcome_type: OutcomeType) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.outcome_type == outcome_type)
    }

    /// Resolve the thought with what actually happened.
    ///
    /// This is the one-way lifecycle transition: it sets `is_resolved`,
    /// `actual_outcome`, and `resolution_date` together, and fails with
    /// [`Error::AlreadyResolved`] on a second call.
    pub fn resolve(&mut self, actual: OutcomeType, at: DateTime<Utc>) -> Result<()> {
        if self.is_resolved {
            return Err(Error::AlreadyResolved(self.id.clone()));
        }
        self.is_resolved = true;
        self.actual_outcome = Some(actual);
        self.resolution_date = Some(at);
        Ok(())
    }

    /// Move the deadline. Only allowed while the thought is unresolved.
    pub fn reschedule_deadline(&mut self, deadline: DateTime<Utc>) -> Result<()> {
        if self.is_resolved {
            return Err(Error::AlreadyResolved(self.id.clone()));
        }
        self.deadline = Some(deadline);
        Ok(())
    }

    /// The universal analytics filter: resolved with both the expected and
    /// the actual outcome recorded.
    ///
    /// Records that fail this predicate (including inconsistent ones, e.g.
    /// resolved without an actual outcome from an external store) are
    /// silently excluded from every analytics computation.
    pub fn qualifies_for_analytics(&self) -> bool {
        self.is_resolved && self.expected_outcome.is_some() && self.actual_outcome.is_some()
    }

    /// The (expected, actual) pair, present exactly when the thought
    /// qualifies for analytics.
    pub fn expected_actual(&self) -> Option<(OutcomeType, OutcomeType)> {
        if !self.is_resolved {
            return None;
        }
        match (self.expected_outcome, self.actual_outcome) {
            (Some(expected), Some(actual)) => Some((expected, actual)),
            _ => None,
        }
    }

    /// Ordinal improvement of reality over expectation (-5..=+5), present
    /// exactly when the thought qualifies for analytics.
    pub fn improvement(&self) -> Option<i32> {
        self.expected_actual()
            .map(|(expected, actual)| actual.ordinal() as i32 - expected.ordinal() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinal_matches_declaration_order() {
        for (i, outcome_type) in OutcomeType::ALL.iter().enumerate() {
            assert_eq!(outcome_type.ordinal() as usize, i);
            assert_eq!(OutcomeType::from_ordinal(i as u8), Some(*outcome_type));
        }
        assert_eq!(OutcomeType::from_ordinal(6), None);
    }

    #[test]
    fn test_scale_is_totally_ordered() {
        assert!(OutcomeType::Worst < OutcomeType::Worse);
        assert!(OutcomeType::Worse < OutcomeType::Okay);
        assert!(OutcomeType::Okay < OutcomeType::Good);
        assert!(OutcomeType::Good < OutcomeType::Better);
        assert!(OutcomeType::Better < OutcomeType::Best);
    }

    #[test]
    fn test_outcome_type_round_trip() {
        for outcome_type in OutcomeType::ALL {
            let parsed: OutcomeType = outcome_type.as_str().parse().unwrap();
            assert_eq!(parsed, outcome_type);
        }
        assert!("catastrophic".parse::<OutcomeType>().is_err());
    }

    #[test]
    fn test_resolve_is_one_way() {
        let mut thought = Thought::new("Will the talk go badly?", Some(OutcomeType::Worse), None);
        assert!(!thought.is_resolved);

        thought.resolve(OutcomeType::Good, Utc::now()).unwrap();
        assert!(thought.is_resolved);
        assert_eq!(thought.actual_outcome, Some(OutcomeType::Good));
        assert!(thought.resolution_date.is_some());

        let err = thought.resolve(OutcomeType::Best, Utc::now()).unwrap_err();
        assert!(matches!(err, Error::AlreadyResolved(_)));
    }

    #[test]
    fn test_reschedule_only_while_unresolved() {
        let mut thought = Thought::new("Job interview", Some(OutcomeType::Okay), Some(Utc::now()));
        thought.reschedule_deadline(Utc::now()).unwrap();

        thought.resolve(OutcomeType::Okay, Utc::now()).unwrap();
        assert!(thought.reschedule_deadline(Utc::now()).is_err());
    }

    #[test]
    fn test_qualifying_filter() {
        let mut thought = Thought::new("Medical results", Some(OutcomeType::Worst), None);
        assert!(!thought.qualifies_for_analytics());
        assert_eq!(thought.expected_actual(), None);

        thought.resolve(OutcomeType::Better, Utc::now()).unwrap();
        assert!(thought.qualifies_for_analytics());
        assert_eq!(
            thought.expected_actual(),
            Some((OutcomeType::Worst, OutcomeType::Better))
        );
        assert_eq!(thought.improvement(), Some(4));

        // No expected outcome recorded: resolved but never qualifying.
        let mut vague = Thought::new("Unspecified dread", None, None);
        vague.resolve(OutcomeType::Okay, Utc::now()).unwrap();
        assert!(!vague.qualifies_for_analytics());

        // Inconsistent external record: resolved flag without an actual.
        let mut inconsistent = Thought::new("Imported record", Some(OutcomeType::Okay), None);
        inconsistent.is_resolved = true;
        assert!(!inconsistent.qualifies_for_analytics());
    }

    #[test]
    fn test_sparse_outcome_lookup() {
        let mut thought = Thought::new("Flight delay", Some(OutcomeType::Worse), None);
        thought.add_outcome(OutcomeType::Worst, "Miss the wedding entirely");
        thought.add_outcome(OutcomeType::Okay, "Arrive late but present");

        assert!(thought.outcome_for(OutcomeType::Worst).is_some());
        assert!(thought.outcome_for(OutcomeType::Best).is_none());
        assert_eq!(thought.outcomes.len(), 2);
    }
}
