//! Configuration resolution: environment first, then defaults.

use std::env::{self, VarError};
use std::time::Duration;

use tracing::warn;

/// Environment variable that overrides the server base URL.
pub const BASE_URL_ENV: &str = "DUMMYSERVER_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Upper bound on each blocking request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::resolve(read_override(env::var(BASE_URL_ENV)))
    }

    /// An unset or blank override falls back to `DEFAULT_BASE_URL`.
    pub fn resolve(base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// A non-UTF-8 value cannot be used as a URL; it is reported and ignored.
fn read_override(value: Result<String, VarError>) -> Option<String> {
    match value {
        Ok(url) => Some(url),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => {
            warn!(var = BASE_URL_ENV, value = ?raw, "ignoring non-UTF-8 override, using default base URL");
            None
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::resolve(None)
    }
}
