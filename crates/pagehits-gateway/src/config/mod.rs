//! Gateway config loader (strict parsing + environment overrides).
//!
//! Sources, later wins:
//! 1. built-in defaults
//! 2. YAML file named by `PAGEHITS_CONFIG` (optional)
//! 3. environment: `TABLE_NAME`, `DYNAMODB_ENDPOINT`, `PAGEHITS_LISTEN`

pub mod schema;

use std::fs;

use pagehits_core::error::{PageHitsError, Result};

pub use schema::{PageHitsConfig, ServerSection, StoreSection};

pub const CONFIG_PATH_ENV: &str = "PAGEHITS_CONFIG";
pub const TABLE_NAME_ENV: &str = "TABLE_NAME";
pub const ENDPOINT_ENV: &str = "DYNAMODB_ENDPOINT";
pub const LISTEN_ENV: &str = "PAGEHITS_LISTEN";

pub fn load_from_file(path: &str) -> Result<PageHitsConfig> {
    let s = read_file(path)?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<PageHitsConfig> {
    let cfg = parse_str(s)?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load using the process environment.
pub fn load_from_env() -> Result<PageHitsConfig> {
    load_with(|key| std::env::var(key).ok())
}

/// Load using an arbitrary variable lookup.
pub fn load_with<F>(lookup: F) -> Result<PageHitsConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut cfg = match non_empty(lookup(CONFIG_PATH_ENV)) {
        Some(path) => parse_str(&read_file(&path)?)?,
        None => PageHitsConfig::default(),
    };

    if let Some(table) = non_empty(lookup(TABLE_NAME_ENV)) {
        cfg.store.table_name = table;
    }
    if let Some(endpoint) = non_empty(lookup(ENDPOINT_ENV)) {
        cfg.store.endpoint_url = Some(endpoint);
    }
    if let Some(listen) = non_empty(lookup(LISTEN_ENV)) {
        cfg.server.listen = listen;
    }

    cfg.validate()?;
    Ok(cfg)
}

fn parse_str(s: &str) -> Result<PageHitsConfig> {
    serde_yaml::from_str(s).map_err(|e| PageHitsError::Config(format!("invalid yaml: {e}")))
}

fn read_file(path: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| PageHitsError::Config(format!("read config `{path}` failed: {e}")))
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
