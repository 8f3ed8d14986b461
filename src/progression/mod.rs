//! Clan progression systems

pub mod level;
pub mod state;
pub mod engine;
pub mod info;

pub use level::{default_level_table, Benefits, LevelDefinition, LevelTable};
pub use level::{INCOME_BONUS, MAX_ALLIES, MAX_MEMBERS};
pub use state::ClanProgressState;
pub use engine::ProgressionEngine;
pub use info::LevelInformation;
