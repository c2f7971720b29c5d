//! Server configuration, read from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use agrisite_forms::{AccessKey, DEFAULT_RELAY_URL};

pub const BIND_ADDR_VAR: &str = "AGRISITE_BIND_ADDR";
pub const RELAY_URL_VAR: &str = "AGRISITE_FORM_RELAY_URL";
pub const ACCESS_KEY_VAR: &str = "AGRISITE_FORM_ACCESS_KEY";
pub const RELAY_TIMEOUT_VAR: &str = "AGRISITE_RELAY_TIMEOUT_SECS";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },
    #[error("{var} must be an http(s) URL, got {value}")]
    InvalidRelayUrl { var: &'static str, value: String },
    #[error("{var} must be a whole number of seconds, got {value}")]
    InvalidTimeout { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub relay_url: String,
    pub access_key: AccessKey,
    pub relay_timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source (the process environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidBindAddr {
            var: BIND_ADDR_VAR,
            value: bind_raw.clone(),
        })?;

        let relay_url = lookup(RELAY_URL_VAR).unwrap_or_else(|| DEFAULT_RELAY_URL.to_string());
        let usable = reqwest::Url::parse(&relay_url)
            .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
            .unwrap_or(false);
        if !usable {
            return Err(ConfigError::InvalidRelayUrl {
                var: RELAY_URL_VAR,
                value: relay_url,
            });
        }

        let relay_timeout = match lookup(RELAY_TIMEOUT_VAR) {
            None => None,
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidTimeout {
                    var: RELAY_TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
                Some(Duration::from_secs(secs))
            }
        };

        let access_key = AccessKey::new(lookup(ACCESS_KEY_VAR).unwrap_or_default());

        Ok(Self {
            bind_addr,
            relay_url,
            access_key,
            relay_timeout,
        })
    }
}
