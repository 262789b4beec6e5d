use anyhow::Context;
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{debug, info};

pub const CONFIG_ENV: &str = "HOROSCOPE_SERVICE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const DEFAULT_LISTEN: &str = "0.0.0.0:5000";

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub listen: Option<String>,
    // Path to a TOML file holding the horoscope texts per humor level.
    // If not set, the built-in table is used.
    pub data_file: Option<String>,
    // Allow cross-origin GETs from any origin, for a landing page hosted elsewhere.
    // Defaults to false.
    pub cors_permissive: Option<bool>,
}

impl Config {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let cfg_str =
            fs::read_to_string(path).with_context(|| format!("reading config '{}'", path))?;
        toml::from_str(&cfg_str).with_context(|| format!("parsing config '{}'", path))
    }

    /// Resolves the config the same way at every startup: an explicit path from
    /// the environment must exist, the default path is optional.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                info!("Loading config from {}={}", CONFIG_ENV, path);
                Self::from_file(&path)
            }
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                info!("Loading config from {}", DEFAULT_CONFIG_PATH);
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            Err(_) => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn listen_addr(&self) -> &str {
        self.listen.as_deref().unwrap_or(DEFAULT_LISTEN)
    }
}
