use crate::domain::Filter;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Filter selected at startup
    #[serde(default)]
    pub default_filter: Filter,
    /// Use ☐/☑ checkboxes instead of [ ]/[x]
    #[serde(default = "default_use_unicode")]
    pub use_unicode: bool,
}

fn default_use_unicode() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_filter: Filter::All,
            use_unicode: default_use_unicode(),
        }
    }
}

/// Load config from config.json
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config: AppConfig = serde_json::from_str(&content)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    Ok(config)
}

/// Load config, using defaults if the file is unreadable or invalid
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> AppConfig {
    load_config(path).unwrap_or_else(|e| {
        warn!(error = %format!("{:#}", e), "using default config");
        AppConfig::default()
    })
}

/// Save config to config.json
pub fn save_config<P: AsRef<Path>>(path: P, config: &AppConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    crate::persistence::atomic_write(path, &json)?;
    Ok(())
}
