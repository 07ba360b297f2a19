use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_PATH: &str = "config.toml";

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    // platform api level assumed for captures that don't record their own
    pub api_level: u32,
    pub pretty: bool,
    // used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_level: 34,
            pretty: false,
            log_level: "info".to_string(),
        }
    }
}

pub fn load(path: &Path) -> Result<Config> {
    let data = fs::read_to_string(path).context("Failed to read config")?;
    let config = toml::from_str(&data).context("Failed to parse config")?;
    Ok(config)
}

/// An explicitly given path must exist; the default one is optional.
pub fn load_or_default(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load(path),
        None if Path::new(DEFAULT_PATH).exists() => load(Path::new(DEFAULT_PATH)),
        None => Ok(Config::default()),
    }
}
