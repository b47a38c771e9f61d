use std::path::PathBuf;

use crate::server::error::config::ConfigError;

/// Server settings read from the environment at startup
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    /// Root directory holding one subdirectory per storage bucket
    pub storage_dir: PathBuf,
    /// Public base URL the site is served from, used to build object download links
    pub public_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let require = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let public_url = require("PUBLIC_URL")?;
        if !(public_url.starts_with("http://") || public_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvValue {
                var: "PUBLIC_URL".to_string(),
                reason: "must start with http:// or https://".to_string(),
            });
        }

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            valkey_url: require("VALKEY_URL")?,
            storage_dir: PathBuf::from(require("STORAGE_DIR")?),
            public_url: public_url.trim_end_matches('/').to_string(),
        })
    }
}
