//! Level definitions and the level table
//!
//! A table maps level numbers to an experience threshold and a set of
//! named benefits. Tables are validated once and never change afterwards.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Named benefit values unlocked at a level (e.g. `max_members`)
pub type Benefits = BTreeMap<String, i64>;

/// Benefit names used by the default table
pub const MAX_MEMBERS: &str = "max_members";
pub const INCOME_BONUS: &str = "income_bonus";
pub const MAX_ALLIES: &str = "max_allies";

/// Default thresholds and benefits: (level, experience, max_members, income_bonus, max_allies)
const DEFAULT_LEVELS: [(u32, i64, i64, i64, i64); 5] = [
    (1, 0, 10, 0, 1),
    (2, 1_000, 15, 5, 2),
    (3, 3_000, 20, 10, 3),
    (4, 7_000, 30, 15, 4),
    (5, 15_000, 40, 25, 5),
];

/// One row of the level table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDefinition {
    /// Level number (1-indexed)
    pub level: u32,
    /// Total experience needed to reach this level
    pub experience_required: i64,
    /// Benefits granted while at this level
    #[serde(default)]
    pub benefits: Benefits,
}

impl LevelDefinition {
    /// Level with no benefits
    pub fn new(level: u32, experience_required: i64) -> Self {
        Self {
            level,
            experience_required,
            benefits: Benefits::new(),
        }
    }

    /// Builder-style benefit assignment
    pub fn with_benefit(mut self, name: impl Into<String>, value: i64) -> Self {
        self.benefits.insert(name.into(), value);
        self
    }

    /// Value of a benefit at this level, 0 if not granted
    pub fn benefit(&self, name: &str) -> i64 {
        self.benefits.get(name).copied().unwrap_or(0)
    }
}

/// Validated, immutable set of level definitions keyed by level number
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelTable {
    levels: BTreeMap<u32, LevelDefinition>,
}

impl LevelTable {
    /// Build a table, rejecting level 0, duplicates, negative thresholds
    /// and thresholds that decrease as the level rises.
    ///
    /// Gaps between level numbers are allowed. An empty table is allowed
    /// too; every lookup on it falls back to its default.
    pub fn new(definitions: Vec<LevelDefinition>) -> Result<Self, ConfigurationError> {
        let mut levels = BTreeMap::new();
        for def in definitions {
            if def.level == 0 {
                return Err(ConfigurationError::NonPositiveLevel(0));
            }
            if def.experience_required < 0 {
                return Err(ConfigurationError::NegativeThreshold {
                    level: def.level,
                    required: def.experience_required,
                });
            }
            let level = def.level;
            if levels.insert(level, def).is_some() {
                return Err(ConfigurationError::DuplicateLevel(level));
            }
        }

        let mut previous: Option<&LevelDefinition> = None;
        for def in levels.values() {
            if let Some(prev) = previous {
                if def.experience_required < prev.experience_required {
                    return Err(ConfigurationError::DecreasingThreshold {
                        level: def.level,
                        required: def.experience_required,
                        previous_level: prev.level,
                        previous_required: prev.experience_required,
                    });
                }
            }
            previous = Some(def);
        }

        Ok(Self { levels })
    }

    /// Highest defined level, 0 for an empty table
    pub fn max_level(&self) -> u32 {
        self.levels.keys().next_back().copied().unwrap_or(0)
    }

    /// Number of defined levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Whether no levels are defined
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Definition of a level, if it exists
    pub fn get(&self, level: u32) -> Option<&LevelDefinition> {
        self.levels.get(&level)
    }

    /// Next defined level strictly above `level`
    pub fn next_after(&self, level: u32) -> Option<&LevelDefinition> {
        self.levels
            .range(level.saturating_add(1)..)
            .next()
            .map(|(_, def)| def)
            .filter(|def| def.level > level)
    }

    /// Definitions in ascending level order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &LevelDefinition> {
        self.levels.values()
    }
}

impl<'a> IntoIterator for &'a LevelTable {
    type Item = &'a LevelDefinition;
    type IntoIter = std::collections::btree_map::Values<'a, u32, LevelDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.values()
    }
}

/// The built-in five level table
pub fn default_level_table() -> LevelTable {
    let levels = DEFAULT_LEVELS
        .iter()
        .map(|&(level, exp, members, income, allies)| {
            let def = LevelDefinition::new(level, exp)
                .with_benefit(MAX_MEMBERS, members)
                .with_benefit(INCOME_BONUS, income)
                .with_benefit(MAX_ALLIES, allies);
            (level, def)
        })
        .collect();
    LevelTable { levels }
}
