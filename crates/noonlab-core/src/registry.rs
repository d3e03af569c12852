//! Registry: owns the decisions and the tribe profiles.
//!
//! Decisions are kept in insertion order and never removed. Lookups are a
//! linear scan, which is all the lab ever needs.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::config::LabConfig;
use crate::dashboard;
use crate::domain::{Decision, DecisionId, Level, StatsSnapshot, Tribe, TribeProfile};
use crate::error::LabError;
use crate::ports::{Clock, IdGenerator, SystemClock, UlidGenerator};

/// In-memory decision registry.
///
/// # 使用例
/// ```
/// use noonlab_core::domain::{Level, Tribe};
/// use noonlab_core::Registry;
///
/// let mut lab = Registry::new();
/// let id = lab.add_decision("Build", "Finish the file system", Level::Operational, Tribe::Builders).id();
/// assert!(lab.vote(id));
/// assert_eq!(lab.get_stats().total_decisions, 1);
/// ```
#[derive(Debug)]
pub struct Registry<G = UlidGenerator<SystemClock>, C = SystemClock> {
    name: String,
    version: String,
    acceptance_threshold: u32,
    decisions: Vec<Decision>,
    tribes: BTreeMap<Tribe, TribeProfile>,
    id_gen: G,
    clock: C,
}

impl Registry {
    /// Registry with the default lab configuration.
    pub fn new() -> Self {
        Self::assemble(
            LabConfig::default(),
            UlidGenerator::new(SystemClock),
            SystemClock,
        )
    }

    pub fn from_config(config: LabConfig) -> Result<Self, LabError> {
        Self::with_parts(config, UlidGenerator::new(SystemClock), SystemClock)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator, C: Clock> Registry<G, C> {
    /// Registry with injected id generator and clock.
    pub fn with_parts(config: LabConfig, id_gen: G, clock: C) -> Result<Self, LabError> {
        config.validate()?;
        Ok(Self::assemble(config, id_gen, clock))
    }

    fn assemble(config: LabConfig, id_gen: G, clock: C) -> Self {
        let tribes = config
            .tribes
            .into_iter()
            .map(|seed| (seed.tribe, seed.profile))
            .collect();

        Self {
            name: config.name,
            version: config.version,
            acceptance_threshold: config.acceptance_threshold,
            decisions: Vec::new(),
            tribes,
            id_gen,
            clock,
        }
    }

    /// Creates a Pending decision with no votes and appends it.
    ///
    /// Inputs are taken as-is. A tribe without a profile is accepted but
    /// logged, since it will not count towards the balance score.
    pub fn add_decision(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        level: Level,
        tribe: Tribe,
    ) -> &Decision {
        let id = self.id_gen.generate_decision_id();
        let decision = Decision::new(id, title, description, level, tribe, self.clock.now());

        if !self.tribes.contains_key(&tribe) {
            warn!(decision_id = %id, %tribe, "decision tagged with a tribe that has no profile");
        }
        debug!(decision_id = %id, title = decision.title(), %level, %tribe, "decision added");

        self.decisions.push(decision);
        &self.decisions[self.decisions.len() - 1]
    }

    /// Adds one vote to the decision with `id`.
    ///
    /// Returns `false` (and changes nothing) when no decision has that id.
    pub fn vote(&mut self, id: DecisionId) -> bool {
        let threshold = self.acceptance_threshold;
        let Some(decision) = self.decisions.iter_mut().find(|d| d.id() == id) else {
            debug!(decision_id = %id, "vote for unknown decision ignored");
            return false;
        };

        if decision.record_vote(threshold) {
            info!(decision_id = %id, votes = decision.votes(), "decision accepted");
        } else {
            debug!(decision_id = %id, votes = decision.votes(), status = %decision.status(), "vote recorded");
        }
        true
    }

    pub fn get_stats(&self) -> StatsSnapshot {
        let accepted = self
            .decisions
            .iter()
            .filter(|d| d.status().is_accepted())
            .count();

        StatsSnapshot {
            name: self.name.clone(),
            version: self.version.clone(),
            total_decisions: self.decisions.len(),
            accepted,
            pending: self.decisions.len() - accepted,
            tribes: self.tribes.len(),
            balance_score: self.balance_score(),
        }
    }

    /// Mean of the profile scores; 0.0 when no tribe has a profile.
    fn balance_score(&self) -> f64 {
        if self.tribes.is_empty() {
            return 0.0;
        }
        let total: u32 = self.tribes.values().map(|p| u32::from(p.score)).sum();
        f64::from(total) / self.tribes.len() as f64
    }

    pub fn render_dashboard(&self) -> String {
        dashboard::render(&self.get_stats())
    }

    pub fn write_dashboard<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        out.write_all(self.render_dashboard().as_bytes())
    }

    /// Prints the dashboard to stdout.
    pub fn print_dashboard(&self) {
        println!();
        print!("{}", self.render_dashboard());
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn acceptance_threshold(&self) -> u32 {
        self.acceptance_threshold
    }

    /// Decisions in insertion order.
    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    pub fn decision(&self, id: DecisionId) -> Option<&Decision> {
        self.decisions.iter().find(|d| d.id() == id)
    }

    pub fn tribe_profile(&self, tribe: Tribe) -> Option<&TribeProfile> {
        self.tribes.get(&tribe)
    }

    pub fn tribes(&self) -> impl Iterator<Item = (Tribe, &TribeProfile)> {
        self.tribes.iter().map(|(tribe, profile)| (*tribe, profile))
    }

    /// Tribes used by some decision that have no profile.
    pub fn untracked_tribes(&self) -> BTreeSet<Tribe> {
        self.decisions
            .iter()
            .map(Decision::tribe)
            .filter(|tribe| !self.tribes.contains_key(tribe))
            .collect()
    }

    /// Pretty-printed JSON array of all decisions.
    pub fn decisions_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.decisions)
    }
}
