//! Client configuration and loaders.
use std::env;
use std::str::FromStr;
use std::time::Duration;

use pokedex_profile::StalePolicy;
use pokedex_protocol::DEFAULT_BASE_URL;
use reqwest::Url;
use thiserror::Error;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("pokedex-client/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}

/// Settings for a [`Pokedex`](crate::Pokedex)
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API root that `/pokemon/{id}` is resolved against
    pub base_url: String,

    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,

    /// How overlapping searches are applied to the result slot
    pub stale_policy: StalePolicy,

    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            stale_policy: StalePolicy::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `POKEAPI_TIMEOUT_SECS` - Request timeout, 0 disables it (default: 30)
    /// - `POKEDEX_DISCARD_STALE` - Drop results of superseded searches (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("POKEAPI_BASE_URL").filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }

        if let Some(secs) = parse_var::<u64>(&lookup, "POKEAPI_TIMEOUT_SECS") {
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        if let Some(discard) = parse_flag(&lookup, "POKEDEX_DISCARD_STALE") {
            config.stale_policy = policy_for(discard);
        }

        config
    }

    /// Parse and check the base URL
    pub fn base(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;

        if url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: "URL cannot have path segments".to_string(),
            });
        }

        Ok(url)
    }
}

fn policy_for(discard_stale: bool) -> StalePolicy {
    if discard_stale {
        StalePolicy::LatestIssued
    } else {
        StalePolicy::LastToSettle
    }
}

fn parse_flag(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<bool> {
    let raw = lookup(name)?;
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => {
            tracing::warn!(var = name, value = %raw, "Ignoring unparseable environment flag");
            None
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(var = name, value = %raw, "Ignoring unparseable environment variable");
            None
        }
    }
}
