//! Error types
//!
//! Only construction and loading of a level table can fail. Lookups always
//! resolve to a well-defined default instead.

use thiserror::Error;

/// Errors raised while building a level table from configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Reading or writing a configuration file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The document could not be parsed in the given format.
    #[error("failed to parse {format} document: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    /// The table could not be serialized for export.
    #[error("failed to serialize {format} document: {message}")]
    Serialize {
        format: &'static str,
        message: String,
    },

    /// File extension does not map to a known format.
    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    /// A level key is not an integer.
    #[error("level key {0:?} is not a number")]
    InvalidLevelKey(String),

    /// A level key is zero or negative.
    #[error("level {0} is not positive")]
    NonPositiveLevel(i64),

    /// The same level number appears twice.
    #[error("level {0} is defined more than once")]
    DuplicateLevel(u32),

    /// A level threshold is below zero.
    #[error("level {level} requires negative experience ({required})")]
    NegativeThreshold { level: u32, required: i64 },

    /// A higher level requires less experience than a lower one.
    #[error("level {level} requires {required} experience, less than level {previous_level} ({previous_required})")]
    DecreasingThreshold {
        level: u32,
        required: i64,
        previous_level: u32,
        previous_required: i64,
    },

    /// `progression.levels` is present but defines nothing.
    #[error("level table section is present but empty")]
    EmptyTable,
}

impl ConfigurationError {
    pub(crate) fn parse(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            format,
            message: err.to_string(),
        }
    }

    pub(crate) fn serialize(format: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Serialize {
            format,
            message: err.to_string(),
        }
    }
}
