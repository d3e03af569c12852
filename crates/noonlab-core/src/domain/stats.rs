use serde::{Deserialize, Serialize};

/// Point-in-time summary of a registry, as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub name: String,
    pub version: String,
    pub total_decisions: usize,
    pub accepted: usize,
    pub pending: usize,
    /// Number of tribes with a profile, not the size of the `Tribe` enum.
    pub tribes: usize,
    /// Unweighted mean of the profile scores.
    pub balance_score: f64,
}
