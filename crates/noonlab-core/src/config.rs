//! Lab configuration.
//!
//! Everything has a default; the demo driver never overrides it. Library
//! callers can build a `LabConfig` in code or deserialize one with serde.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::tribe::{self, Tribe, TribeProfile};
use crate::error::LabError;

const fn default_acceptance_threshold() -> u32 {
    3
}

fn default_name() -> String {
    "Noon-Lab".to_string()
}

fn default_version() -> String {
    "1.0.0".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TribeSeed {
    pub tribe: Tribe,
    #[serde(flatten)]
    pub profile: TribeProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_version")]
    pub version: String,

    /// Votes needed before a decision is accepted.
    #[serde(default = "default_acceptance_threshold")]
    pub acceptance_threshold: u32,

    #[serde(default = "default_tribes")]
    pub tribes: Vec<TribeSeed>,
}

fn default_tribes() -> Vec<TribeSeed> {
    tribe::default_profiles()
        .into_iter()
        .map(|(tribe, profile)| TribeSeed { tribe, profile })
        .collect()
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            acceptance_threshold: default_acceptance_threshold(),
            tribes: default_tribes(),
        }
    }
}

impl LabConfig {
    /// Checks the threshold and the tribe seeds.
    ///
    /// Decision inputs are never validated; only the lab's own setup is.
    pub fn validate(&self) -> Result<(), LabError> {
        if self.acceptance_threshold == 0 {
            return Err(LabError::InvalidThreshold(self.acceptance_threshold));
        }

        let mut seen = HashSet::new();
        for seed in &self.tribes {
            if seed.profile.score > 100 {
                return Err(LabError::ScoreOutOfRange {
                    tribe: seed.tribe,
                    score: seed.profile.score,
                });
            }
            if !seen.insert(seed.tribe) {
                return Err(LabError::DuplicateTribe(seed.tribe));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = LabConfig::default();
        assert_eq!(config.name, "Noon-Lab");
        assert_eq!(config.version, "1.0.0");
        assert_eq!(config.acceptance_threshold, 3);
        assert_eq!(config.tribes.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: LabConfig = serde_json::from_str(r#"{ "acceptance_threshold": 5 }"#).unwrap();

        assert_eq!(config.acceptance_threshold, 5);
        assert_eq!(config.name, "Noon-Lab");
        assert_eq!(config.tribes, LabConfig::default().tribes);
    }

    #[test]
    fn tribe_seeds_deserialize_flat() {
        let config: LabConfig = serde_json::from_str(
            r#"{ "tribes": [ { "tribe": "analysts", "score": 70, "role": "Reading the numbers" } ] }"#,
        )
        .unwrap();

        assert_eq!(
            config.tribes,
            vec![TribeSeed {
                tribe: Tribe::Analysts,
                profile: TribeProfile::new(70, "Reading the numbers"),
            }]
        );
    }

    #[test]
    fn zero_threshold_is_rejected() {
        let config = LabConfig {
            acceptance_threshold: 0,
            ..LabConfig::default()
        };
        assert_eq!(config.validate(), Err(LabError::InvalidThreshold(0)));
    }

    #[test]
    fn score_above_hundred_is_rejected() {
        let mut config = LabConfig::default();
        config.tribes[1].profile.score = 101;

        assert_eq!(
            config.validate(),
            Err(LabError::ScoreOutOfRange {
                tribe: Tribe::Teachers,
                score: 101
            })
        );
    }

    #[test]
    fn duplicate_tribe_is_rejected() {
        let mut config = LabConfig::default();
        let first = config.tribes[0].clone();
        config.tribes.push(first);

        assert_eq!(
            config.validate(),
            Err(LabError::DuplicateTribe(Tribe::Builders))
        );
    }
}
