//! Endpoint, credentials and model for the chat-completion client

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

pub const ENV_API_KEY: &str = "TEXTMORPH_LLM_API_KEY";
pub const ENV_BASE_URL: &str = "TEXTMORPH_LLM_BASE_URL";
pub const ENV_MODEL: &str = "TEXTMORPH_LLM_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "TEXTMORPH_LLM_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Chat-completion client configuration
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LlmConfig {
    /// Bearer token sent with every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL; `/chat/completions` is appended
    pub base_url: String,
    pub model: String,
    /// Request timeout. `None` keeps the HTTP client's default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: None,
        }
    }
}

// Keeps the key out of logs
impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl LlmConfig {
    /// Load from the process environment after reading any `.env` file
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; empty values count as unset
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let timeout_secs = match get(ENV_TIMEOUT_SECS) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| Error::Configuration {
                message: format!("{} must be a whole number of seconds, got '{}'", ENV_TIMEOUT_SECS, raw),
                source: Some(anyhow::Error::new(e)),
            })?),
            None => None,
        };

        Ok(Self {
            api_key: get(ENV_API_KEY),
            base_url: get(ENV_BASE_URL).unwrap_or(defaults.base_url),
            model: get(ENV_MODEL).unwrap_or(defaults.model),
            timeout_secs,
        })
    }

    /// Check that a key is present and the base URL is an http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
            return Err(Error::configuration(format!(
                "LLM API key not found. Set {} or llm.api_key in the config file",
                ENV_API_KEY
            )));
        }

        let url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::configuration(format!(
                "Unsupported base URL scheme '{}'",
                url.scheme()
            )));
        }

        if self.model.trim().is_empty() {
            return Err(Error::configuration("LLM model must not be empty"));
        }

        if self.timeout_secs == Some(0) {
            return Err(Error::configuration("timeout_secs must be greater than zero"));
        }

        Ok(())
    }

    /// Full chat-completions endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = LlmConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, LlmConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_reads_variables() {
        let config = LlmConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "sk-test"),
            (ENV_BASE_URL, "http://localhost:8000/v1/"),
            (ENV_MODEL, "qwen3"),
            (ENV_TIMEOUT_SECS, " 30 "),
        ]))
        .unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.model, "qwen3");
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.endpoint(), "http://localhost:8000/v1/chat/completions");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_timeout_is_configuration_error() {
        let err = LlmConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_validate_requires_key() {
        let err = LlmConfig::default().validate().unwrap_err();
        assert!(err.to_string().contains(ENV_API_KEY));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = LlmConfig {
            api_key: Some("k".into()),
            base_url: "not a url".into(),
            ..LlmConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Configuration { .. })));

        let config = LlmConfig {
            api_key: Some("k".into()),
            base_url: "ftp://example.com".into(),
            ..LlmConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_hides_key() {
        let config = LlmConfig {
            api_key: Some("sk-secret".into()),
            ..LlmConfig::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("***"));
    }
}
