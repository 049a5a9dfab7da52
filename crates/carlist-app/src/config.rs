//! Configuration management for carlist
//!
//! Config stored at: ~/.config/carlist/config.json

use carlist_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Brand listed by the demo
    #[serde(default = "default_demo_brand")]
    pub demo_brand: String,

    /// Model checked for age by the demo
    #[serde(default = "default_demo_model")]
    pub demo_model: String,

    /// Minimum age in years for the demo model query (exclusive)
    #[serde(default = "default_demo_min_age_years")]
    pub demo_min_age_years: i32,

    /// Production year for the demo price query
    #[serde(default = "default_demo_year")]
    pub demo_year: i32,

    /// Price the demo price query must exceed
    #[serde(default = "default_demo_min_price")]
    pub demo_min_price: i64,
}

fn default_demo_brand() -> String {
    "Aston Martin".to_string()
}

fn default_demo_model() -> String {
    "Cayman".to_string()
}

fn default_demo_min_age_years() -> i32 {
    3
}

fn default_demo_year() -> i32 {
    2022
}

fn default_demo_min_price() -> i64 {
    3_000_000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            demo_brand: default_demo_brand(),
            demo_model: default_demo_model(),
            demo_min_age_years: default_demo_min_age_years(),
            demo_year: default_demo_year(),
            demo_min_price: default_demo_min_price(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("carlist");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or use defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or use defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)).into())
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Carlist Configuration")?;
        writeln!(f, "=====================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Demo brand:     {}", self.demo_brand)?;
        writeln!(
            f,
            "Demo model:     {} (older than {} years)",
            self.demo_model, self.demo_min_age_years
        )?;
        writeln!(
            f,
            "Demo price:     year {} above {}",
            self.demo_year, self.demo_min_price
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carlist_types::{ConfigError, Error};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.demo_brand, "Aston Martin");
        assert_eq!(config.demo_min_price, 3_000_000);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            output_format: OutputFormat::Json,
            demo_brand: "Tesla".to_string(),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "output_format": "json", "demo_year": 2020 }"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.output_format, OutputFormat::Json);
        assert_eq!(loaded.demo_year, 2020);
        assert_eq!(loaded.demo_model, "Cayman");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_display_summary() {
        let text = Config::default().to_string();
        assert!(text.contains("Output format:  table"));
        assert!(text.contains("Cayman (older than 3 years)"));
    }
}
