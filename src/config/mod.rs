mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`) and applies
/// environment overrides. A missing default file falls back to built-in
/// defaults; a missing file named through `CONFIG_PATH` is an error.
pub async fn load() -> Result<Config> {
    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let mut config = if explicit_path.is_none() && !Path::new(&config_path).exists() {
        debug!("No {} found, using default configuration", config_path);
        Config::default()
    } else {
        debug!("Loading configuration from: {}", config_path);
        load_from_path(&config_path).await?
    };

    apply_env_overrides(&mut config, |key| env::var(key).ok());

    Ok(config)
}

pub async fn load_from_path(path: &str) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::config(format!("Failed to read {}: {}", path, e)))?;
    parse(&config_str)
}

pub fn parse(yaml: &str) -> Result<Config> {
    // An empty document deserializes to unit, not to a defaulted struct.
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(yaml)?)
}

/// Overrides file values with environment variables read through `lookup`.
pub fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(key) = lookup("GEMINI_API_KEY").or_else(|| lookup("LLM_API_KEY")) {
        if !key.is_empty() {
            config.llm.api_key = key;
        }
    }

    if let Some(url) = lookup("INVENTORY_SERVICE_URL") {
        if !url.is_empty() {
            config.query.inventory_url = url;
        }
    }
}
