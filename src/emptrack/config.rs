use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAUSE_MS: u64 = 1000;
const DATABASE_FILENAME: &str = "emptrack.db";

/// Configuration for emptrack, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    /// SQLite database file. `None` means `<data dir>/emptrack.db`.
    #[serde(default)]
    pub database: Option<PathBuf>,

    /// Pause between two menu iterations, in milliseconds
    #[serde(default = "default_pause_ms")]
    pub pause_ms: u64,

    /// Show the intro banner before the menu
    #[serde(default = "default_banner")]
    pub banner: bool,
}

fn default_pause_ms() -> u64 {
    DEFAULT_PAUSE_MS
}

fn default_banner() -> bool {
    true
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            database: None,
            pause_ms: DEFAULT_PAUSE_MS,
            banner: true,
        }
    }
}

impl TrackerConfig {
    pub const KEYS: &'static [&'static str] = &["database", "pause-ms", "banner"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TrackerError::Io)?;
        let config: TrackerConfig =
            serde_json::from_str(&content).map_err(TrackerError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TrackerError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TrackerError::Serialization)?;
        fs::write(config_path, content).map_err(TrackerError::Io)?;
        Ok(())
    }

    /// The database file to open, falling back to the data directory default.
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        self.database
            .clone()
            .unwrap_or_else(|| data_dir.join(DATABASE_FILENAME))
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_ms)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "database" => Some(
                self.database
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(default)".to_string()),
            ),
            "pause-ms" => Some(self.pause_ms.to_string()),
            "banner" => Some(self.banner.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "database" => {
                self.database = match value.trim() {
                    "" | "default" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            "pause-ms" => {
                self.pause_ms = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("pause-ms must be a whole number, got {}", value))?;
            }
            "banner" => {
                self.banner = match value.trim() {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    other => return Err(format!("banner must be true or false, got {}", other)),
                };
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.pause_ms, 1000);
        assert!(config.banner);
        assert_eq!(config.database, None);
    }

    #[test]
    fn test_default_database_lives_in_data_dir() {
        let config = TrackerConfig::default();
        assert_eq!(
            config.database_path(Path::new("/data")),
            PathBuf::from("/data/emptrack.db")
        );
    }

    #[test]
    fn test_set_and_get_keys() {
        let mut config = TrackerConfig::default();
        config.set("pause-ms", "250").unwrap();
        config.set("banner", "off").unwrap();
        config.set("database", "/tmp/staff.db").unwrap();

        assert_eq!(config.pause(), Duration::from_millis(250));
        assert_eq!(config.get("banner").as_deref(), Some("false"));
        assert_eq!(config.get("database").as_deref(), Some("/tmp/staff.db"));

        config.set("database", "default").unwrap();
        assert_eq!(config.database, None);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = TrackerConfig::default();
        assert!(config.set("pause-ms", "soon").is_err());
        assert!(config.set("banner", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = TrackerConfig::load(temp_dir.path().join("absent")).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("emptrack");

        let mut config = TrackerConfig::default();
        config.set("pause-ms", "0").unwrap();
        config.save(&dir).unwrap();

        let loaded = TrackerConfig::load(&dir).unwrap();
        assert_eq!(loaded.pause_ms, 0);
        assert!(loaded.banner);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: TrackerConfig = serde_json::from_str(r#"{"banner": false}"#).unwrap();
        assert_eq!(config.pause_ms, 1000);
        assert!(!config.banner);
    }
}
