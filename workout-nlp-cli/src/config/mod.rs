use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Database directory; defaults to the config directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default = "default_true")]
    pub normalize: bool,

    #[serde(default = "default_true")]
    pub fill_cardio_fields: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    #[serde(default = "default_true")]
    pub show_adjusted_distance: bool,
}

// Default value functions
fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            normalize: default_true(),
            fill_cardio_fields: default_true(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_adjusted_distance: default_true(),
        }
    }
}

impl Config {
    /// Get config directory path (~/.workout-nlp/)
    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".workout-nlp"))
    }

    /// Get config file path (~/.workout-nlp/config.toml)
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Database directory: env override, then config, then the config directory
    pub fn db_path(&self) -> Result<PathBuf> {
        if let Ok(path) = std::env::var("WORKOUT_NLP_DB_PATH") {
            return Ok(PathBuf::from(path));
        }

        match &self.storage.path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("db")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.parser.normalize);
        assert!(config.parser.fill_cardio_fields);
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(config.output.show_adjusted_distance);
        assert!(config.storage.path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();

        assert_eq!(deserialized.output.format, OutputFormat::Json);
        assert_eq!(config.parser.normalize, deserialized.parser.normalize);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[output]\nformat = \"json\"\n").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_adjusted_distance);
        assert!(config.parser.normalize);
    }

    #[test]
    fn test_load_missing_file_and_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("config.toml");

        let config = Config::load_from(&path)?;
        assert_eq!(config.output.format, OutputFormat::Table);

        let mut config = config;
        config.parser.normalize = false;
        config.save_to(&path)?;

        let loaded = Config::load_from(&path)?;
        assert!(!loaded.parser.normalize);

        Ok(())
    }
}
