//! Api config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use fastzero_core::error::{FastZeroError, Result};

pub use schema::{ApiConfig, ServerSection, UsersSection};

/// Config file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_PATH: &str = "fastzero.yaml";

pub fn load_from_file(path: &str) -> Result<ApiConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| FastZeroError::Config(format!("read {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ApiConfig> {
    let cfg: ApiConfig = serde_yaml::from_str(s)
        .map_err(|e| FastZeroError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// An explicit path must be readable; the default path is optional and
/// falls back to built-in defaults.
pub fn load(explicit: Option<&str>) -> Result<ApiConfig> {
    match explicit {
        Some(path) => load_from_file(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH),
        None => {
            tracing::info!(path = DEFAULT_CONFIG_PATH, "no config file, using defaults");
            Ok(ApiConfig::default())
        }
    }
}
