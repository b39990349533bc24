//! Dictionary Lookup Service

use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, warn};

use wordcheck::{LookupResult, UpstreamPayload, resolve};

use crate::config::Config;
use crate::errors::{ApiError, Result};

/// Common interface for the lookup service
///
/// This trait allows swapping production implementation (`DictionaryApiService`) with
/// test stubs/mocks.
#[async_trait]
pub trait LookupService: Send + Sync {
  /// Looks up a trimmed, non-empty word
  ///
  /// # Errors
  /// - Configuration error (API key not set)
  /// - Upstream error (non-success status)
  /// - Unexpected error (network failure, timeout, malformed JSON)
  async fn lookup(&self, word: &str) -> Result<LookupResult>;
}

/// Lookup service backed by the Merriam-Webster Collegiate API
#[derive(Clone)]
pub struct DictionaryApiService {
  /// HTTP client (carries the request timeout)
  client: reqwest::Client,
  /// Endpoint base; the word is appended as one path segment
  endpoint: Url,
  /// API key, if configured
  api_key: Option<String>,
}

impl DictionaryApiService {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (endpoint, API key, timeout)
  ///
  /// # Errors
  /// Returns an error if the endpoint URL is invalid or the HTTP client cannot be built
  pub fn new(config: &Config) -> Result<Self> {
    let endpoint = Url::parse(&config.upstream_url).map_err(|e| {
      ApiError::config(format!("Invalid upstream URL {}: {}", config.upstream_url, e))
    })?;

    if endpoint.cannot_be_a_base() {
      return Err(ApiError::config(format!(
        "Upstream URL cannot take a path: {}",
        config.upstream_url
      )));
    }

    let client = reqwest::Client::builder()
      .timeout(config.upstream_timeout)
      .build()
      .map_err(|e| ApiError::config(format!("Failed to build HTTP client: {}", e)))?;

    Ok(Self {
      client,
      endpoint,
      api_key: config.api_key.clone(),
    })
  }

  /// Builds `<endpoint>/<word>?key=<api_key>` with both parts percent-encoded
  fn request_url(&self, word: &str, api_key: &str) -> Url {
    let mut url = self.endpoint.clone();
    // cannot_be_a_base() was rejected in new(), so path_segments_mut() succeeds.
    if let Ok(mut segments) = url.path_segments_mut() {
      segments.pop_if_empty().push(word);
    }
    url.query_pairs_mut().append_pair("key", api_key);
    url
  }

  /// Executes the lookup
  ///
  /// # Errors
  /// See [`LookupService::lookup`]
  pub async fn lookup(&self, word: &str) -> Result<LookupResult> {
    let api_key = self.api_key.as_deref().ok_or_else(ApiError::missing_api_key)?;

    let url = self.request_url(word, api_key);
    let response = self.client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
      warn!(status = status.as_u16(), word, "dictionary API returned an error status");
      return Err(ApiError::upstream(status));
    }

    let body = response.bytes().await?;
    let payload = UpstreamPayload::from_slice(&body)?;
    debug!(word, entries = payload.entries.len(), "dictionary API payload received");

    Ok(resolve(word, &payload))
  }
}

/// Production implementation of trait `LookupService`
#[async_trait]
impl LookupService for DictionaryApiService {
  async fn lookup(&self, word: &str) -> Result<LookupResult> {
    // Note: Writing `self.lookup(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    DictionaryApiService::lookup(self, word).await
  }
}
