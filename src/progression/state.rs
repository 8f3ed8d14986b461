//! Per-clan progress
//!
//! Owned and stored by the clan-management side. The engine only reads it
//! and updates it through `ProgressionEngine::add_experience`.

use serde::{Deserialize, Serialize};

/// Experience and current level of a single clan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClanProgressState {
    /// Accumulated experience
    pub experience: i64,
    /// Current level (1-indexed)
    pub level: u32,
}

impl Default for ClanProgressState {
    fn default() -> Self {
        Self {
            experience: 0,
            level: 1,
        }
    }
}

impl ClanProgressState {
    /// A freshly founded clan
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a previously stored state as-is
    pub fn with_progress(experience: i64, level: u32) -> Self {
        Self { experience, level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clan_starts_at_level_one() {
        let state = ClanProgressState::new();
        assert_eq!(state.experience, 0);
        assert_eq!(state.level, 1);
    }

    #[test]
    fn test_state_serializes_for_external_storage() {
        let state = ClanProgressState::with_progress(4200, 3);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"experience":4200,"level":3}"#);
        let back: ClanProgressState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
