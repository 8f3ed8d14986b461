//! Clan Progression - experience and levels for player clans
//!
//! Tracks clan experience against a table of level thresholds and
//! resolves the benefits each level grants.

pub mod error;
pub mod progression;
pub mod data;

// Re-export commonly used types
pub use error::ConfigurationError;
pub use progression::{
    default_level_table, Benefits, ClanProgressState, LevelDefinition, LevelInformation,
    LevelTable, ProgressionEngine,
};
pub use data::ProgressionConfig;
