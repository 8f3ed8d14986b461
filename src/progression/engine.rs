//! Progression engine
//!
//! Applies experience gains to clan state and answers level and benefit
//! queries against an immutable level table.

use std::path::Path;

use crate::data::config::ProgressionConfig;
use crate::data::loader;
use crate::error::ConfigurationError;

use super::info::LevelInformation;
use super::level::{default_level_table, Benefits, LevelTable};
use super::state::ClanProgressState;

/// Experience accrual and benefit lookup over a fixed level table
#[derive(Debug, Clone)]
pub struct ProgressionEngine {
    table: LevelTable,
}

impl Default for ProgressionEngine {
    fn default() -> Self {
        Self::with_default_table()
    }
}

impl ProgressionEngine {
    /// Engine over an already validated table
    pub fn new(table: LevelTable) -> Self {
        if table.is_empty() {
            log::warn!("Progression engine created with an empty level table; every clan stays at level 1");
        }
        Self { table }
    }

    /// Engine over the built-in five level table
    pub fn with_default_table() -> Self {
        Self::new(default_level_table())
    }

    /// Build from a parsed configuration document.
    ///
    /// A document without a `progression.levels` section gets the default
    /// table; a section that is present must be valid.
    pub fn from_config(config: &ProgressionConfig) -> Result<Self, ConfigurationError> {
        config.level_table().map(Self::new)
    }

    /// Build from a YAML, RON or JSON file. A missing file gets the default table.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        loader::load_level_table(path.as_ref()).map(Self::new)
    }

    /// The level table this engine resolves against
    pub fn table(&self) -> &LevelTable {
        &self.table
    }

    /// Highest defined level, 0 for an empty table
    pub fn max_level(&self) -> u32 {
        self.table.max_level()
    }

    /// Add experience and raise the level if a new threshold was crossed.
    ///
    /// Returns true only when the level went up. Negative amounts are
    /// applied to the experience total but never lower the level.
    pub fn add_experience(&self, state: &mut ClanProgressState, amount: i64) -> bool {
        state.experience = state.experience.saturating_add(amount);
        let new_level = self.calculate_level(state.experience);
        if new_level > state.level {
            log::debug!(
                "Clan leveled up: {} -> {} ({} experience)",
                state.level,
                new_level,
                state.experience
            );
            state.level = new_level;
            true
        } else {
            false
        }
    }

    /// Highest level whose threshold is covered by `experience`, or 1 if none is
    pub fn calculate_level(&self, experience: i64) -> u32 {
        self.table
            .iter()
            .rev()
            .find(|def| def.experience_required <= experience)
            .map(|def| def.level)
            .unwrap_or(1)
    }

    /// Experience still missing for the next level, `None` at the cap.
    ///
    /// The result can be zero or negative when the stored level lags behind
    /// the stored experience.
    pub fn experience_for_next_level(&self, state: &ClanProgressState) -> Option<i64> {
        if state.level >= self.max_level() {
            return None;
        }
        self.table
            .next_after(state.level)
            .map(|next| next.experience_required.saturating_sub(state.experience))
    }

    /// Value of a single benefit at the clan's level, 0 if not granted
    pub fn clan_benefit(&self, state: &ClanProgressState, benefit: &str) -> i64 {
        self.table
            .get(state.level)
            .map(|def| def.benefit(benefit))
            .unwrap_or(0)
    }

    /// Copy of every benefit at the clan's level
    pub fn all_clan_benefits(&self, state: &ClanProgressState) -> Benefits {
        self.level_benefits(state.level)
    }

    /// Copy of the benefits of any level, empty if the level is not defined
    pub fn level_benefits(&self, level: u32) -> Benefits {
        self.table
            .get(level)
            .map(|def| def.benefits.clone())
            .unwrap_or_default()
    }

    /// Threshold of any level, 0 if the level is not defined
    pub fn required_experience_for_level(&self, level: u32) -> i64 {
        self.table
            .get(level)
            .map(|def| def.experience_required)
            .unwrap_or(0)
    }

    /// Snapshot of the clan's standing for display
    pub fn level_information(&self, state: &ClanProgressState) -> LevelInformation {
        LevelInformation::build(self, state)
    }
}
