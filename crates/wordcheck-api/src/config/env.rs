//! Config loading from environment variables

use std::fmt;
use std::time::Duration;

use super::constants::{
  DEFAULT_BIND_ADDR, DEFAULT_UPSTREAM_TIMEOUT_MS, DEFAULT_UPSTREAM_URL, ENV_API_KEY,
  ENV_BIND_ADDR, ENV_UPSTREAM_TIMEOUT_MS, ENV_UPSTREAM_URL,
};
use crate::errors::ApiError;

/// API Server Configuration
///
/// Built once at startup and handed to the service and router.
#[derive(Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:8787")
  pub bind_addr: String,
  /// Dictionary API key. `None` means lookups answer with a configuration error.
  pub api_key: Option<String>,
  /// Dictionary API base URL (the word is appended as a path segment)
  pub upstream_url: String,
  /// Timeout for one upstream request
  pub upstream_timeout: Duration,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_source(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// Blank values are treated as unset.
  ///
  /// # Errors
  /// Returns an error if the timeout is not a positive integer
  pub fn from_source<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let bind_addr = get(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let api_key = get(ENV_API_KEY);
    let upstream_url = get(ENV_UPSTREAM_URL).unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());

    let upstream_timeout_ms = match get(ENV_UPSTREAM_TIMEOUT_MS) {
      Some(raw) => parse_timeout_ms(&raw)?,
      None => DEFAULT_UPSTREAM_TIMEOUT_MS,
    };

    Ok(Self {
      bind_addr,
      api_key,
      upstream_url,
      upstream_timeout: Duration::from_millis(upstream_timeout_ms),
    })
  }
}

fn parse_timeout_ms(raw: &str) -> crate::errors::Result<u64> {
  match raw.parse::<u64>() {
    Ok(ms) if ms > 0 => Ok(ms),
    _ => Err(ApiError::config(format!(
      "{ENV_UPSTREAM_TIMEOUT_MS} must be a positive integer (milliseconds): {raw}"
    ))),
  }
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: DEFAULT_BIND_ADDR.to_string(),
      api_key: None,
      upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
      upstream_timeout: Duration::from_millis(DEFAULT_UPSTREAM_TIMEOUT_MS),
    }
  }
}

// The API key must never reach the logs.
impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("bind_addr", &self.bind_addr)
      .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
      .field("upstream_url", &self.upstream_url)
      .field("upstream_timeout", &self.upstream_timeout)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn config_with(vars: &[(&str, &str)]) -> crate::errors::Result<Config> {
    let vars: HashMap<String, String> =
      vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    Config::from_source(|key| vars.get(key).cloned())
  }

  #[test]
  fn defaults_when_nothing_is_set() {
    let config = config_with(&[]).unwrap();
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.api_key, None);
    assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
    assert_eq!(config.upstream_timeout, Duration::from_secs(10));
  }

  #[test]
  fn reads_all_variables() {
    let config = config_with(&[
      ("WORDCHECK_API_BIND_ADDR", "0.0.0.0:9000"),
      ("MW_COLLEGIATE_KEY", "abc-123"),
      ("WORDCHECK_UPSTREAM_URL", "http://127.0.0.1:4000/json"),
      ("WORDCHECK_UPSTREAM_TIMEOUT_MS", "2500"),
    ])
    .unwrap();

    assert_eq!(config.bind_addr, "0.0.0.0:9000");
    assert_eq!(config.api_key.as_deref(), Some("abc-123"));
    assert_eq!(config.upstream_url, "http://127.0.0.1:4000/json");
    assert_eq!(config.upstream_timeout, Duration::from_millis(2500));
  }

  #[test]
  fn blank_api_key_is_unset() {
    let config = config_with(&[("MW_COLLEGIATE_KEY", "   ")]).unwrap();
    assert_eq!(config.api_key, None);
  }

  #[test]
  fn invalid_timeout_is_config_error() {
    for raw in ["soon", "0", "-5"] {
      let err = config_with(&[("WORDCHECK_UPSTREAM_TIMEOUT_MS", raw)]).unwrap_err();
      assert_eq!(err.code(), "config_error");
    }
  }

  #[test]
  fn debug_output_redacts_api_key() {
    let config = config_with(&[("MW_COLLEGIATE_KEY", "super-secret")]).unwrap();
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("<redacted>"));
  }
}
