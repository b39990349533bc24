//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::errors::Result;
use crate::service::{DictionaryApiService, LookupService};

/// Application State
///
/// Shared by every handler. Cloning is cheap (the service sits behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Dictionary Lookup Service
  ///
  /// - Production: [`AppState::from_config`] wires a `DictionaryApiService`
  /// - Test: `AppState::new(config, Arc::new(StubLookupService))`
  pub service: Arc<dyn LookupService>,
}

impl AppState {
  /// Creates a new AppState with an explicit service
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn LookupService>) -> Self {
    Self { config, service }
  }

  /// Creates the production AppState backed by the dictionary API
  ///
  /// # Errors
  /// Returns an error if the upstream client cannot be built from `config`
  pub fn from_config(config: Config) -> Result<Self> {
    let service = Arc::new(DictionaryApiService::new(&config)?);
    Ok(Self::new(config, service))
  }
}
