//! Level information snapshots
//!
//! Plain data for whatever renders progress bars or level summaries.

use serde::Serialize;

use super::engine::ProgressionEngine;
use super::level::Benefits;
use super::state::ClanProgressState;

/// A clan's standing against the level table at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelInformation {
    pub level: u32,
    pub max_level: u32,
    pub experience: i64,
    /// Next defined level, `None` at the cap
    pub next_level: Option<u32>,
    /// Experience still missing for `next_level`
    pub experience_to_next_level: Option<i64>,
    /// Fraction of the way from the current threshold to the next one, 0.0..=1.0
    pub progress: Option<f64>,
    pub benefits: Benefits,
    /// Empty at the cap
    pub next_level_benefits: Benefits,
}

impl LevelInformation {
    pub(crate) fn build(engine: &ProgressionEngine, state: &ClanProgressState) -> Self {
        let max_level = engine.max_level();
        let next = if state.level >= max_level {
            None
        } else {
            engine.table().next_after(state.level)
        };

        let current_required = engine.required_experience_for_level(state.level);
        let progress = next.map(|def| {
            let span = def.experience_required.saturating_sub(current_required);
            if span <= 0 {
                1.0
            } else {
                let gained = state.experience.saturating_sub(current_required);
                (gained as f64 / span as f64).clamp(0.0, 1.0)
            }
        });

        Self {
            level: state.level,
            max_level,
            experience: state.experience,
            next_level: next.map(|def| def.level),
            experience_to_next_level: engine.experience_for_next_level(state),
            progress,
            benefits: engine.all_clan_benefits(state),
            next_level_benefits: next.map(|def| def.benefits.clone()).unwrap_or_default(),
        }
    }

    /// Whether the clan sits at the highest defined level
    pub fn is_max_level(&self) -> bool {
        self.next_level.is_none()
    }

    /// Progress as a whole percentage, 100 at the cap
    pub fn progress_percent(&self) -> u8 {
        match self.progress {
            Some(fraction) => (fraction * 100.0).floor() as u8,
            None => 100,
        }
    }
}
