use thiserror::Error;

use crate::domain::Tribe;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabError {
    #[error("acceptance threshold must be at least 1 (got {0})")]
    InvalidThreshold(u32),

    #[error("score for tribe={tribe} must be within 0..=100 (got {score})")]
    ScoreOutOfRange { tribe: Tribe, score: u8 },

    #[error("duplicate profile for tribe={0}")]
    DuplicateTribe(Tribe),
}
