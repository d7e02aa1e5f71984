//! Configuration management for bucketsize
//!
//! Config stored at: ~/.config/bucketsize/config.json

use bucketsize_domain::model::ProductivityPolicy;
use bucketsize_types::{ConfigError, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog directory override
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Label used for the recommended bucket in reports
    #[serde(default = "default_recommended_label")]
    pub recommended_label: String,

    /// Model constants
    #[serde(default)]
    pub policy: ProductivityPolicy,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_recommended_label() -> String {
    "Recommended Bucket".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            output_format: default_output_format(),
            recommended_label: default_recommended_label(),
            policy: ProductivityPolicy::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("bucketsize");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the catalog directory path
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("bucketsize");
        Ok(data_dir)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path, or create default
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        config.policy.validate()?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.policy.validate()?;

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
        writeln!(f, "Bucketsize Configuration")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Catalog dir:          {}",
            self.data_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Output format:        {}", self.output_format)?;
        writeln!(f, "Recommended label:    {}", self.recommended_label)?;
        writeln!(f)?;
        writeln!(f, "Efficiency factor:    {}", self.policy.efficiency_factor)?;
        writeln!(f, "Cycle improvement:    {}", self.policy.cycle_improvement_factor)?;
        writeln!(f, "Daily swings:         {}", self.policy.reference_daily_swings)?;
        writeln!(f, "Fill headroom:        {}", self.policy.fill_headroom_fraction)?;
        writeln!(f, "Fill step:            {}", self.policy.fill_step_fraction)?;
        writeln!(f, "Swing tolerance:      {}", self.policy.swing_tolerance)?;
        writeln!(f, "Class ceiling offset: {}", self.policy.class_ceiling_offset)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:          {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config.output_format, OutputFormat::Table);
        assert_eq!(config.policy, ProductivityPolicy::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = Config::default();
        config.output_format = OutputFormat::Json;
        config.policy.efficiency_factor = 0.8;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.output_format, OutputFormat::Json);
        assert_eq!(loaded.policy.efficiency_factor, 0.8);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"policy": {"swing_tolerance": 0.1}}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.policy.swing_tolerance, 0.1);
        assert_eq!(config.policy.efficiency_factor, 0.75);
        assert_eq!(config.recommended_label, "Recommended Bucket");
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"policy": {"fill_step_fraction": 0}}"#).unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse configuration"));
    }
}
