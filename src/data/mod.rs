//! Level table configuration
//!
//! Parses the `progression.levels` configuration document and loads it
//! from YAML, RON or JSON files, with fallback to the built-in table.

pub mod config;
pub mod loader;

pub use config::{ConfigFormat, LevelEntries, LevelEntry, LevelKey, ProgressionConfig};
pub use loader::{export_default_table, export_level_table, load_level_table};
