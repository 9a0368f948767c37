use std::net::SocketAddr;

use pagehits_core::error::{PageHitsError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageHitsConfig {
    pub version: u32,

    #[serde(default)]
    pub store: StoreSection,

    #[serde(default)]
    pub server: ServerSection,
}

impl Default for PageHitsConfig {
    fn default() -> Self {
        Self {
            version: 1,
            store: StoreSection::default(),
            server: ServerSection::default(),
        }
    }
}

impl PageHitsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PageHitsError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.store.validate()?;
        self.server.validate()?;

        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    /// DynamoDB table keyed by `page_id`. Usually supplied via `TABLE_NAME`.
    #[serde(default)]
    pub table_name: String,

    /// Override for a local DynamoDB, e.g. `http://localhost:8000`.
    #[serde(default)]
    pub endpoint_url: Option<String>,

    #[serde(default)]
    pub region: Option<String>,
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        if self.table_name.is_empty() {
            return Err(PageHitsError::Config(
                "store.table_name must be set (or TABLE_NAME)".into(),
            ));
        }
        // DynamoDB table name length limits.
        if !(3..=255).contains(&self.table_name.len()) {
            return Err(PageHitsError::Config(
                "store.table_name must be between 3 and 255 characters".into(),
            ));
        }
        if let Some(ep) = &self.endpoint_url {
            if !(ep.starts_with("http://") || ep.starts_with("https://")) {
                return Err(PageHitsError::Config(format!(
                    "store.endpoint_url must be an http(s) url, got `{ep}`"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// Listen address for local (non-Lambda) mode.
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            PageHitsError::Config(format!(
                "server.listen `{}` is not a socket address: {e}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
