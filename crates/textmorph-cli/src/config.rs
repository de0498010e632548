//! Configuration management for the CLI
//!
//! This module handles loading and merging configuration from:
//! - Default values
//! - Configuration files (YAML/JSON)
//! - Environment variables (`TEXTMORPH_LLM_*`, read by the core library)
//!
//! Values from the file take precedence over the environment.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use textmorph_core::LlmConfig;

/// File name looked up in the current directory and the user config directory
const PROJECT_FILE_STEM: &str = ".textmorph";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Chat-model settings for the acrostic-poem strategy
    pub llm: LlmSettings,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingSettings,

    /// File this configuration was read from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Chat-model overrides; unset fields fall back to the environment
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LlmSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Use colored output when the terminal supports it
    pub color: bool,

    /// Show a spinner while waiting on the chat model
    pub progress: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level used when no `-v` flag is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Log format (compact, full, json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Log file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            progress: true,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let mut config: Config = match FileFormat::of(path)? {
            FileFormat::Yaml => serde_yaml::from_str(&content)?,
            FileFormat::Json => serde_json::from_str(&content)?,
        };
        config.source = Some(path.to_path_buf());

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Default configuration file paths, in lookup order
    pub fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(format!("{}.yaml", PROJECT_FILE_STEM)),
            PathBuf::from(format!("{}.yml", PROJECT_FILE_STEM)),
            PathBuf::from(format!("{}.json", PROJECT_FILE_STEM)),
        ];

        if let Some(user_path) = Self::user_config_path() {
            let json_path = user_path.with_extension("json");
            paths.push(user_path);
            paths.push(json_path);
        }

        paths
    }

    /// `config.yaml` inside the user config directory
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("textmorph").join("config.yaml"))
    }

    /// Chat-model configuration: environment first, file values on top
    pub fn llm_config(&self) -> Result<LlmConfig> {
        let base = LlmConfig::from_env()?;
        Ok(self.llm.apply_to(base))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = match FileFormat::of(path)? {
            FileFormat::Yaml => serde_yaml::to_string(self)?,
            FileFormat::Json => serde_json::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}

impl LlmSettings {
    /// Overlay the fields that are set onto `base`
    pub fn apply_to(&self, mut base: LlmConfig) -> LlmConfig {
        if let Some(key) = &self.api_key {
            base.api_key = Some(key.clone());
        }
        if let Some(url) = &self.base_url {
            base.base_url = url.clone();
        }
        if let Some(model) = &self.model {
            base.model = model.clone();
        }
        if self.timeout_secs.is_some() {
            base.timeout_secs = self.timeout_secs;
        }
        base
    }
}

enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    fn of(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(Error::InvalidFormat {
                path: path.to_path_buf(),
                expected: "YAML or JSON".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_yaml_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.llm.model = Some("local-model".to_string());
        config.logging.format = Some("json".to_string());
        config.output.progress = false;
        config.save(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.source.as_deref(), Some(path.as_path()));
        assert_eq!(loaded.llm, config.llm);
        assert_eq!(loaded.output, config.output);
        assert_eq!(loaded.logging, config.logging);
    }

    #[test]
    fn test_json_with_missing_sections_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"llm": {"base_url": "http://localhost:8080/v1"}}"#).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.llm.base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert_eq!(loaded.output, OutputConfig::default());
        assert!(loaded.logging.level.is_none());
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();
        assert!(matches!(
            Config::from_file(&path),
            Err(Error::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_file_values_override_base() {
        let settings = LlmSettings {
            api_key: Some("file-key".to_string()),
            model: Some("file-model".to_string()),
            ..Default::default()
        };
        let base = LlmConfig {
            api_key: Some("env-key".to_string()),
            base_url: "http://env.example/v1".to_string(),
            model: "env-model".to_string(),
            timeout_secs: Some(30),
        };

        let merged = settings.apply_to(base);
        assert_eq!(merged.api_key.as_deref(), Some("file-key"));
        assert_eq!(merged.model, "file-model");
        assert_eq!(merged.base_url, "http://env.example/v1");
        assert_eq!(merged.timeout_secs, Some(30));
    }

    #[test]
    fn test_default_paths_start_in_current_directory() {
        let paths = Config::default_config_paths();
        assert_eq!(paths[0], PathBuf::from(".textmorph.yaml"));
        assert!(paths.contains(&PathBuf::from(".textmorph.json")));
    }
}
