//! Decision state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a decision.
///
/// State transitions:
/// - Pending -> Accepted (votes >= acceptance threshold)
///
/// Accepted is terminal: further votes are counted but never move it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    /// Waiting for enough votes.
    #[default]
    Pending,

    /// Reached the acceptance threshold.
    Accepted,
}

impl DecisionStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Accepted],
            Self::Accepted => &[],
        }
    }

    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!((self, next), (Self::Pending, Self::Accepted))
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
        }
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::pending_to_accepted(DecisionStatus::Pending, DecisionStatus::Accepted, true)]
    #[case::accepted_to_pending(DecisionStatus::Accepted, DecisionStatus::Pending, false)]
    #[case::pending_to_pending(DecisionStatus::Pending, DecisionStatus::Pending, false)]
    #[case::accepted_to_accepted(DecisionStatus::Accepted, DecisionStatus::Accepted, false)]
    fn transitions(
        #[case] from: DecisionStatus,
        #[case] to: DecisionStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(from.can_transition_to(to), allowed);
        assert_eq!(from.allowed_next_states().contains(&to), allowed);
    }

    #[test]
    fn default_is_pending() {
        assert_eq!(DecisionStatus::default(), DecisionStatus::Pending);
        assert!(!DecisionStatus::default().is_accepted());
    }
}
