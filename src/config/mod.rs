pub mod error;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::language::Go;
use error::{ConfigError, Result};

/// Name of the configuration file searched for next to the target file
pub const CONFIG_FILE: &str = "gog.toml";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Main configuration structure for gog
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level: error, warn, info, debug, trace
    pub log_level: Option<String>,

    /// File extensions recognized as Go sources, without the leading dot
    pub extensions: Vec<String>,

    /// Append generated code to the file instead of printing it
    pub write: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: None,
            extensions: vec!["go".to_string()],
            write: false,
        }
    }
}

impl Config {
    /// Load configuration from the nearest gog.toml at or above `target_path`.
    /// Falls back to defaults when there is none.
    pub fn load(target_path: impl AsRef<Path>) -> Result<Self> {
        match find_config_file(target_path.as_ref())? {
            Some(config_path) => Self::from_file(&config_path),
            None => {
                debug!("No {} found, using defaults", CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let config_data = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config: Config = toml::from_str(&config_data)?;
        config.normalize();
        config.validate()?;

        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Language support matching the configured extensions
    pub fn language(&self) -> Go {
        Go::with_extensions(self.extensions.clone())
    }

    fn normalize(&mut self) {
        for extension in &mut self.extensions {
            let trimmed = extension.trim();
            if trimmed.starts_with('.') {
                warn!("Extension '{}' in {} should not start with a dot", trimmed, CONFIG_FILE);
            }
            *extension = trimmed.trim_start_matches('.').to_string();
        }
        if let Some(level) = &mut self.log_level {
            *level = level.trim().to_ascii_lowercase();
        }
    }

    fn validate(&self) -> Result<()> {
        if self.extensions.is_empty() || self.extensions.iter().any(|ext| ext.is_empty()) {
            return Err(ConfigError::Invalid(
                "'extensions' must list at least one non-empty extension".to_string(),
            ));
        }
        if let Some(level) = &self.log_level {
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "unknown log_level '{}', expected one of {}",
                    level,
                    LOG_LEVELS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

/// Find gog.toml by searching upward from the given path
fn find_config_file(start_path: &Path) -> Result<Option<PathBuf>> {
    // A file path (which may not exist yet) is searched from its directory
    let current_dir = if start_path.is_dir() {
        start_path
    } else {
        start_path.parent().unwrap_or(Path::new("."))
    };
    let current_dir = if current_dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        current_dir
    };

    // Nothing to search when the directory is missing; the document check
    // reports the missing file
    if !current_dir.is_dir() {
        debug!(path = %current_dir.display(), "Config search directory does not exist");
        return Ok(None);
    }

    let mut current_dir = current_dir.canonicalize()?;

    loop {
        let config_path = current_dir.join(CONFIG_FILE);
        if config_path.is_file() {
            return Ok(Some(config_path));
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.extensions, vec!["go".to_string()]);
        assert!(!config.write);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            log_level: Some("info".to_string()),
            ..Config::default()
        };
        assert!(config.validate().is_ok());

        config.log_level = Some("loud".to_string());
        assert!(config.validate().is_err());

        config.log_level = None;
        config.extensions.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_find_config_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "write = true\n")?;

        // Should find config in same directory
        let found = find_config_file(temp_dir.path())?.unwrap();
        assert_eq!(found.canonicalize()?, config_path.canonicalize()?);

        // Should find config from a file in a subdirectory
        let sub_dir = temp_dir.path().join("domain");
        fs::create_dir(&sub_dir)?;
        let go_file = sub_dir.join("point.go");
        fs::write(&go_file, "package domain\n")?;
        let found = find_config_file(&go_file)?.unwrap();
        assert_eq!(found.canonicalize()?, config_path.canonicalize()?);

        Ok(())
    }

    #[test]
    fn test_missing_directory_has_no_config() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let missing = temp_dir.path().join("no/such/dir/gone.go");

        assert_eq!(find_config_file(&missing)?, None);
        assert_eq!(Config::load(&missing)?, Config::default());

        Ok(())
    }

    #[test]
    fn test_load_normalizes_values() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "log_level = \"DEBUG\"\nextensions = [\".go\", \"gotmpl\"]\n",
        )?;

        let config = Config::load(temp_dir.path())?;
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.extensions, vec!["go", "gotmpl"]);
        assert!(!config.write);

        Ok(())
    }

    #[test]
    fn test_load_rejects_bad_toml() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join(CONFIG_FILE), "write = \"maybe\"\n")?;

        let err = Config::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFailed(_)));

        Ok(())
    }
}
