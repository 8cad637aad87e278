use std::env;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

pub const REMOTE_URL_VAR: &str = "FEEDBACK_REMOTE_URL";
pub const HTTP_TIMEOUT_VAR: &str = "FEEDBACK_HTTP_TIMEOUT_SECS";
pub const LOG_VAR: &str = "FEEDBACK_LOG";

/// Runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of a remote feedback service; the in-memory demo store is used when unset
    pub remote_url: Option<String>,
    /// Per-request timeout for the remote store
    pub http_timeout: Duration,
    /// Default log filter when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote_url: None,
            http_timeout: Duration::from_secs(30),
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults overridden by whatever is set in the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            remote_url: lookup(REMOTE_URL_VAR).filter(|url| !url.trim().is_empty()),
            http_timeout: parse_or(&lookup, HTTP_TIMEOUT_VAR, defaults.http_timeout.as_secs())
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
            log_filter: lookup(LOG_VAR).unwrap_or(defaults.log_filter),
        }
    }
}

// Invalid values fall back to the default instead of aborting startup.
fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Some(default),
        Some(raw) => match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Invalid {key} value {raw:?}: {e}, using default");
                None
            }
        },
    }
}
