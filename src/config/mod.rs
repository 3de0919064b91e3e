// src/config/mod.rs
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// The one external setting: where the extraction service lives. Precedence
/// is built-in default, then the optional config file, then the environment
/// (`FUNCVIEW_API_BASE`).
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_string() }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("api_base", DEFAULT_API_BASE)
            .context("Failed to seed configuration defaults")?;

        if let Some(path) = Self::config_file() {
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }
        builder = builder.add_source(Environment::with_prefix("FUNCVIEW"));

        let settings = builder.build().context("Failed to read configuration")?;
        settings.try_deserialize().context("Invalid configuration")
    }

    fn config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("funcview").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn default_points_at_local_service() {
        assert_eq!(AppConfig::default().api_base, "http://localhost:8000");
    }

    #[test]
    fn file_overrides_default() {
        let settings = Config::builder()
            .set_default("api_base", DEFAULT_API_BASE)
            .unwrap()
            .add_source(File::from_str("api_base = \"http://10.0.0.5:9000\"", FileFormat::Toml))
            .build()
            .unwrap();
        let config: AppConfig = settings.try_deserialize().unwrap();
        assert_eq!(config.api_base, "http://10.0.0.5:9000");
    }

    #[test]
    fn environment_overrides_file() {
        std::env::set_var("FUNCVIEW_API_BASE", "http://env-host:8000");
        let settings = Config::builder()
            .set_default("api_base", DEFAULT_API_BASE)
            .unwrap()
            .add_source(File::from_str("api_base = \"http://file-host:8000\"", FileFormat::Toml))
            .add_source(Environment::with_prefix("FUNCVIEW"))
            .build()
            .unwrap();
        let config: AppConfig = settings.try_deserialize().unwrap();
        std::env::remove_var("FUNCVIEW_API_BASE");
        assert_eq!(config.api_base, "http://env-host:8000");
    }
}
