//! Environment configuration for the gateway binary.

use crate::error::ConfigError;

pub const DEFAULT_ITEM_SERVICE_URL: &str = "http://127.0.0.1:3000/";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the item service. Paths such as `api/items` are appended
    /// verbatim, so it normally ends with `/`.
    pub item_service_url: String,
    pub port: u16,
}

impl Config {
    /// Read `ITEM_SERVICE_URL` and `PORT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let item_service_url =
            lookup("ITEM_SERVICE_URL").unwrap_or_else(|| DEFAULT_ITEM_SERVICE_URL.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            item_service_url,
            port,
        })
    }
}
