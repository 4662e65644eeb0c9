use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::client::transport::DEFAULT_BASE_URL;

pub const API_KEY_ENV: &str = "CLICKUP_API_KEY";
pub const BASE_URL_ENV: &str = "CLICKUP_BASE_URL";

#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    /// Used by `team-data` and `spaces` when no team is given.
    pub team_id: Option<String>,
}

impl AppConfig {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Environment wins over the file.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(key) = var(API_KEY_ENV).filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = var(BASE_URL_ENV).filter(|u| !u.trim().is_empty()) {
            self.base_url = Some(url);
        }
    }
}

pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".clickup")
}

fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

pub fn load_config() -> Result<AppConfig> {
    let mut config = load_config_from(&config_path())?;
    config.apply_env(|name| std::env::var(name).ok());
    Ok(config)
}
