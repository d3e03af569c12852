//! Decision levels (severity / scope tiers).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scope tier a decision is filed under.
///
/// Purely a classification tag: no registry operation interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Operational,
    Strategic,
    Civilizational,
    Cosmic,
    Temporal,
    CosmicDeep,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Self::Operational,
        Self::Strategic,
        Self::Civilizational,
        Self::Cosmic,
        Self::Temporal,
        Self::CosmicDeep,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Operational => "operational",
            Self::Strategic => "strategic",
            Self::Civilizational => "civilizational",
            Self::Cosmic => "cosmic",
            Self::Temporal => "temporal",
            Self::CosmicDeep => "cosmic_deep",
        }
    }

    /// Human-readable label for console output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Operational => "Operational",
            Self::Strategic => "Strategic",
            Self::Civilizational => "Civilizational",
            Self::Cosmic => "Cosmic",
            Self::Temporal => "Temporal",
            Self::CosmicDeep => "Deep Cosmic",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
