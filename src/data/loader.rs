//! Level table file loader
//!
//! Loads a level table from a YAML, RON or JSON file. A missing file means
//! the server has not customized progression and the default table is used;
//! a file that exists but is broken is reported, not papered over.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ConfigurationError;
use crate::progression::level::{default_level_table, LevelTable};

use super::config::{ConfigFormat, ProgressionConfig};

/// Load and validate a level table from `path`
pub fn load_level_table(path: &Path) -> Result<LevelTable, ConfigurationError> {
    let format = ConfigFormat::from_path(path)?;
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::info!("{} not found, using default level table", path.display());
            return Ok(default_level_table());
        }
        Err(e) => {
            log::error!("Failed to read {}: {}", path.display(), e);
            return Err(e.into());
        }
    };
    let config = format.parse(&content)?;
    config.level_table().map_err(|e| {
        log::error!("Invalid level table in {}: {}", path.display(), e);
        e
    })
}

/// Write `table` to `path` in the format given by its extension
pub fn export_level_table(path: &Path, table: &LevelTable) -> Result<(), ConfigurationError> {
    let format = ConfigFormat::from_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let text = format.render(&ProgressionConfig::from_table(table))?;
    fs::write(path, text)?;
    log::info!("Exported {} levels to {}", table.len(), path.display());
    Ok(())
}

/// Write the built-in table to `path` so it can be edited
pub fn export_default_table(path: &Path) -> Result<(), ConfigurationError> {
    export_level_table(path, &default_level_table())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::level::LevelDefinition;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let table = load_level_table(&dir.path().join("progression.yml")).unwrap();
        assert_eq!(table, default_level_table());
    }

    #[test]
    fn test_export_default_data() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["levels.yml", "levels.ron", "nested/levels.json"] {
            let path = dir.path().join(name);
            export_default_table(&path).unwrap();
            assert!(path.exists(), "{} not created", name);
            assert_eq!(load_level_table(&path).unwrap(), default_level_table());
        }
    }

    #[test]
    fn test_custom_table_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.yaml");
        let table = LevelTable::new(vec![
            LevelDefinition::new(1, 0).with_benefit("max_members", 4),
            LevelDefinition::new(2, 50),
            LevelDefinition::new(6, 600).with_benefit("war_declarations", 1),
        ])
        .unwrap();

        export_level_table(&path, &table).unwrap();
        assert_eq!(load_level_table(&path).unwrap(), table);
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("levels.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            load_level_table(&path),
            Err(ConfigurationError::Parse { format: "json", .. })
        ));

        fs::write(&path, r#"{"progression":{"levels":{"abc":{"exp_required":1}}}}"#).unwrap();
        assert!(matches!(
            load_level_table(&path),
            Err(ConfigurationError::InvalidLevelKey(_))
        ));
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        // A directory where the file should be
        let path = dir.path().join("levels.yml");
        fs::create_dir(&path).unwrap();
        assert!(matches!(load_level_table(&path), Err(ConfigurationError::Io(_))));

        // A regular file used as a parent directory
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("levels.yml");
        assert!(matches!(load_level_table(&path), Err(ConfigurationError::Io(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("levels.txt");
        assert!(matches!(
            load_level_table(&path),
            Err(ConfigurationError::UnsupportedFormat(_))
        ));
    }
}
