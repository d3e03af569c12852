//! Tribes (organizational units) and their metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Organizational unit a decision is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tribe {
    Builders,
    Teachers,
    Guardians,
    Developers,
    Designers,
    Analysts,
    Researchers,
    Innovators,
    Coordinators,
}

impl Tribe {
    pub const ALL: [Tribe; 9] = [
        Self::Builders,
        Self::Teachers,
        Self::Guardians,
        Self::Developers,
        Self::Designers,
        Self::Analysts,
        Self::Researchers,
        Self::Innovators,
        Self::Coordinators,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Builders => "builders",
            Self::Teachers => "teachers",
            Self::Guardians => "guardians",
            Self::Developers => "developers",
            Self::Designers => "designers",
            Self::Analysts => "analysts",
            Self::Researchers => "researchers",
            Self::Innovators => "innovators",
            Self::Coordinators => "coordinators",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Builders => "Builders",
            Self::Teachers => "Teachers",
            Self::Guardians => "Guardians",
            Self::Developers => "Developers",
            Self::Designers => "Designers",
            Self::Analysts => "Analysts",
            Self::Researchers => "Researchers",
            Self::Innovators => "Innovators",
            Self::Coordinators => "Coordinators",
        }
    }
}

impl fmt::Display for Tribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Balance metadata carried by some tribes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TribeProfile {
    /// 0..=100, checked by `LabConfig::validate`.
    pub score: u8,
    pub role: String,
}

impl TribeProfile {
    pub fn new(score: u8, role: impl Into<String>) -> Self {
        Self {
            score,
            role: role.into(),
        }
    }
}

/// The three tribes seeded by default. The other six have no profile.
pub fn default_profiles() -> Vec<(Tribe, TribeProfile)> {
    vec![
        (Tribe::Builders, TribeProfile::new(80, "Infrastructure building")),
        (Tribe::Teachers, TribeProfile::new(85, "Teaching and documentation")),
        (Tribe::Guardians, TribeProfile::new(90, "Balance protection")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profiles_cover_three_of_nine() {
        let profiles = default_profiles();
        let scores: Vec<u8> = profiles.iter().map(|(_, p)| p.score).collect();

        assert_eq!(profiles.len(), 3);
        assert_eq!(Tribe::ALL.len(), 9);
        assert_eq!(scores, vec![80, 85, 90]);
    }

    #[test]
    fn tribe_round_trips_through_snake_case() {
        let json = serde_json::to_string(&Tribe::Coordinators).unwrap();
        assert_eq!(json, "\"coordinators\"");

        let tribe: Tribe = serde_json::from_str("\"guardians\"").unwrap();
        assert_eq!(tribe, Tribe::Guardians);
    }
}
