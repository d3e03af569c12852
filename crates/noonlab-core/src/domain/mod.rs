//! Domain model (ids, classification tags, decision records, stats).

pub mod decision;
pub mod ids;
pub mod level;
pub mod state;
pub mod stats;
pub mod tribe;

pub use decision::Decision;
pub use ids::DecisionId;
pub use level::Level;
pub use state::DecisionStatus;
pub use stats::StatsSnapshot;
pub use tribe::{Tribe, TribeProfile};
