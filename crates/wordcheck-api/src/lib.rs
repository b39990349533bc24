//! wordcheck-api crate
//!
//! Web server exposing the wordcheck dictionary lookup as an HTTP API.
//!
//! ## Endpoints
//! - `GET /lookup?word=...` - Dictionary lookup
//! - `POST /lookup` - Dictionary lookup (`{"word": "..."}`)
//! - `OPTIONS /lookup` - CORS preflight
//! - `GET /health` - Health Check
//!
//! `/.netlify/functions/lookup` is served as an alias of `/lookup`.
//!
//! ## Usage Example
//! ```bash
//! MW_COLLEGIATE_KEY=... cargo run -p wordcheck-api
//! curl 'http://127.0.0.1:8787/lookup?word=test'
//! curl -X POST http://127.0.0.1:8787/lookup \
//!   -H "Content-Type: application/json" \
//!   -d '{"word": "tets"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{LookupRequest, LookupResponse};
pub use service::{DictionaryApiService, LookupService};
