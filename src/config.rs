use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SupermaidsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Drop and recreate the schema before seeding (default true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset: Option<bool>,
}

impl SupermaidsConfig {
    pub fn database_path(&self) -> PathBuf {
        self.database
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(default_database_path)
    }

    pub fn reset(&self) -> bool {
        self.reset.unwrap_or(true)
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("supermaids.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("supermaids.db")
}

pub fn load_config(path: Option<&Path>) -> Result<Option<SupermaidsConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: SupermaidsConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &SupermaidsConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    let contents = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    std::fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_db_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(Some(&dir.path().join("absent.toml"))).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("supermaids.toml");
        let config = SupermaidsConfig {
            database: Some("data/jobs.db".into()),
            reset: Some(false),
        };

        write_config(&path, &config, false).unwrap();
        let loaded = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.database_path(), PathBuf::from("data/jobs.db"));
        assert!(!loaded.reset());
    }

    #[test]
    fn test_write_refuses_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("supermaids.toml");
        write_config(&path, &SupermaidsConfig::default(), false).unwrap();

        assert!(matches!(
            write_config(&path, &SupermaidsConfig::default(), false),
            Err(Error::Config(_))
        ));
        write_config(&path, &SupermaidsConfig::default(), true).unwrap();
    }

    #[test]
    fn test_defaults() {
        let config = SupermaidsConfig::default();
        assert_eq!(config.database_path(), default_database_path());
        assert!(config.reset());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "reset = \"sometimes\"").unwrap();
        assert!(matches!(load_config(Some(&path)), Err(Error::Config(_))));
    }

    #[test]
    fn test_ensure_db_dir_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("nested").join("supermaids.db");
        ensure_db_dir(&db).unwrap();
        assert!(dir.path().join("nested").is_dir());
    }
}
