//! Level table configuration document
//!
//! Mirrors the server config layout:
//!
//! ```yaml
//! progression:
//!   levels:
//!     1:
//!       exp_required: 0
//!       benefits:
//!         max_members: 10
//!     2:
//!       exp_required: 1000
//! ```
//!
//! The same shape is accepted as RON or JSON. Other top-level keys are
//! ignored so the section can live inside a larger config file.

use std::fmt;
use std::path::Path;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigurationError;
use crate::progression::level::{default_level_table, Benefits, LevelDefinition, LevelTable};

/// Supported document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Ron,
    Json,
}

impl ConfigFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigurationError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "yml" | "yaml" => Ok(ConfigFormat::Yaml),
            "ron" => Ok(ConfigFormat::Ron),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(ConfigurationError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Short format name used in error messages
    pub fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "yaml",
            ConfigFormat::Ron => "ron",
            ConfigFormat::Json => "json",
        }
    }

    /// Parse a document in this format
    pub fn parse(&self, content: &str) -> Result<ProgressionConfig, ConfigurationError> {
        match self {
            ConfigFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|e| ConfigurationError::parse(self.name(), e))
            }
            ConfigFormat::Ron => {
                // Optional sections may be written without `Some(...)`
                ron::Options::default()
                    .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
                    .from_str(content)
                    .map_err(|e| ConfigurationError::parse(self.name(), e))
            }
            ConfigFormat::Json => {
                serde_json::from_str(content).map_err(|e| ConfigurationError::parse(self.name(), e))
            }
        }
    }

    /// Serialize a document in this format
    pub fn render(&self, config: &ProgressionConfig) -> Result<String, ConfigurationError> {
        match self {
            ConfigFormat::Yaml => serde_yaml::to_string(config)
                .map_err(|e| ConfigurationError::serialize(self.name(), e)),
            ConfigFormat::Ron => {
                ron::ser::to_string_pretty(config, ron::ser::PrettyConfig::default())
                    .map_err(|e| ConfigurationError::serialize(self.name(), e))
            }
            ConfigFormat::Json => serde_json::to_string_pretty(config)
                .map_err(|e| ConfigurationError::serialize(self.name(), e)),
        }
    }
}

/// Top-level document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progression: Option<ProgressionSection>,
}

/// `progression:` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressionSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<LevelEntries>,
}

/// Entries of the `levels:` mapping in document order.
///
/// Every entry is kept, repeated keys included, so that validation can
/// reject a level defined twice instead of keeping whichever came last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LevelEntries(pub Vec<(LevelKey, LevelEntry)>);

impl LevelEntries {
    /// Number of entries, repeated keys counted separately
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in document order
    pub fn iter(&self) -> impl Iterator<Item = &(LevelKey, LevelEntry)> {
        self.0.iter()
    }
}

impl Serialize for LevelEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(key, entry)| (key, entry)))
    }
}

struct LevelEntriesVisitor;

impl<'de> Visitor<'de> for LevelEntriesVisitor {
    type Value = LevelEntries;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping of level numbers to level entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<LevelEntries, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, entry)) = map.next_entry::<LevelKey, LevelEntry>()? {
            entries.push((key, entry));
        }
        Ok(LevelEntries(entries))
    }
}

impl<'de> Deserialize<'de> for LevelEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LevelEntriesVisitor)
    }
}

/// `progression.levels.<n>:` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelEntry {
    pub exp_required: i64,
    #[serde(default)]
    pub benefits: Benefits,
}

/// Raw level key as written in the document.
///
/// Formats disagree on whether map keys may be integers, so the key is kept
/// as text and only turned into a level number during validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LevelKey(pub String);

impl LevelKey {
    /// Parse into a positive level number
    pub fn level(&self) -> Result<u32, ConfigurationError> {
        let text = self.0.trim();
        let number: i64 = text
            .parse()
            .map_err(|_| ConfigurationError::InvalidLevelKey(self.0.clone()))?;
        if number <= 0 {
            return Err(ConfigurationError::NonPositiveLevel(number));
        }
        u32::try_from(number).map_err(|_| ConfigurationError::InvalidLevelKey(self.0.clone()))
    }
}

impl From<u32> for LevelKey {
    fn from(level: u32) -> Self {
        LevelKey(level.to_string())
    }
}

impl Serialize for LevelKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

struct LevelKeyVisitor;

impl<'de> Visitor<'de> for LevelKeyVisitor {
    type Value = LevelKey;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a level number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<LevelKey, E> {
        Ok(LevelKey(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<LevelKey, E> {
        Ok(LevelKey(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<LevelKey, E> {
        Ok(LevelKey(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<LevelKey, E> {
        Ok(LevelKey(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<LevelKey, E> {
        Ok(LevelKey(v.to_string()))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<LevelKey, E> {
        Ok(LevelKey(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for LevelKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LevelKeyVisitor)
    }
}

impl ProgressionConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigurationError> {
        ConfigFormat::Yaml.parse(content)
    }

    /// Parse a RON document; `Some(...)` around sections is optional
    pub fn from_ron_str(content: &str) -> Result<Self, ConfigurationError> {
        ConfigFormat::Ron.parse(content)
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> Result<Self, ConfigurationError> {
        ConfigFormat::Json.parse(content)
    }

    /// Accept an already-parsed mapping-of-mappings
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigurationError> {
        serde_json::from_value(value).map_err(|e| ConfigurationError::parse("json", e))
    }

    /// Document describing an existing table
    pub fn from_table(table: &LevelTable) -> Self {
        let levels = table
            .iter()
            .map(|def| {
                let entry = LevelEntry {
                    exp_required: def.experience_required,
                    benefits: def.benefits.clone(),
                };
                (LevelKey::from(def.level), entry)
            })
            .collect();
        Self {
            progression: Some(ProgressionSection {
                levels: Some(LevelEntries(levels)),
            }),
        }
    }

    /// Whether the document defines its own levels
    pub fn has_levels(&self) -> bool {
        self.progression
            .as_ref()
            .and_then(|p| p.levels.as_ref())
            .is_some()
    }

    /// Validate into a level table. No `levels` section means the default table.
    pub fn level_table(&self) -> Result<LevelTable, ConfigurationError> {
        let Some(levels) = self.progression.as_ref().and_then(|p| p.levels.as_ref()) else {
            log::info!("No progression.levels section configured, using default level table");
            return Ok(default_level_table());
        };
        if levels.is_empty() {
            return Err(ConfigurationError::EmptyTable);
        }

        let definitions = levels
            .iter()
            .map(|(key, entry)| {
                Ok(LevelDefinition {
                    level: key.level()?,
                    experience_required: entry.exp_required,
                    benefits: entry.benefits.clone(),
                })
            })
            .collect::<Result<Vec<_>, ConfigurationError>>()?;

        let table = LevelTable::new(definitions)?;
        log::info!("Loaded level table with {} levels (max level {})", table.len(), table.max_level());
        Ok(table)
    }
}
