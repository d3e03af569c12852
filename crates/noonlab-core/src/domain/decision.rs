//! Decision record: a votable proposal with classification tags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::DecisionId;
use super::level::Level;
use super::state::DecisionStatus;
use super::tribe::Tribe;

/// A decision tracked by the registry.
///
/// Identity and classification are fixed at creation. `status` and `votes`
/// change only through [`Decision::record_vote`], which the registry calls
/// from `vote`, so the invariants hold for every record it owns:
/// - votes never decrease
/// - status only moves Pending -> Accepted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    id: DecisionId,
    title: String,
    description: String,
    level: Level,
    tribe: Tribe,
    status: DecisionStatus,
    /// Informational only.
    created_at: DateTime<Utc>,
    votes: u32,
}

impl Decision {
    pub fn new(
        id: DecisionId,
        title: impl Into<String>,
        description: impl Into<String>,
        level: Level,
        tribe: Tribe,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            level,
            tribe,
            status: DecisionStatus::Pending,
            created_at,
            votes: 0,
        }
    }

    pub fn id(&self) -> DecisionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn tribe(&self) -> Tribe {
        self.tribe
    }

    pub fn status(&self) -> DecisionStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn votes(&self) -> u32 {
        self.votes
    }

    /// Count one vote and accept the decision once `threshold` is reached.
    ///
    /// Returns `true` only for the vote that moved the decision to Accepted.
    pub(crate) fn record_vote(&mut self, threshold: u32) -> bool {
        self.votes = self.votes.saturating_add(1);

        if self.votes >= threshold && self.status.can_transition_to(DecisionStatus::Accepted) {
            self.status = DecisionStatus::Accepted;
            return true;
        }
        false
    }
}
