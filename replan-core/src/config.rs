use std::env;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Environment variable consulted first when resolving the oracle
/// credential.
pub const API_KEY_ENV: &str = "GROK_API_KEY";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SelectorConfig {
    pub api_url: String,
    pub model: String,
    pub temperature: f64,
    pub connect_timeout_seconds: u64,
    pub request_timeout_seconds: u64,
    /// Credential fallback when the environment variable is unset.
    pub api_key: Option<String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.x.ai/v1/chat/completions".to_string(),
            model: "grok-3".to_string(),
            temperature: 0.1,
            connect_timeout_seconds: 30,
            request_timeout_seconds: 30,
            api_key: None,
        }
    }
}

impl SelectorConfig {
    /// Resolves the oracle credential: the environment variable wins, then
    /// the config file's `api_key`. Blank values count as absent. Missing
    /// in both places is fatal before any selection call can happen.
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Ok(key) = env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }
        if let Some(key) = &self.api_key {
            if !key.trim().is_empty() {
                return Ok(key.clone());
            }
        }
        Err(ConfigError::MissingApiKey)
    }
}

pub fn load_selector_config<P: AsRef<Path>>(path: P) -> Result<SelectorConfig> {
    load_toml(path)
}

fn load_toml<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        source,
        path: path.to_path_buf(),
    })
}
