//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, DEFAULT_UPSTREAM_TIMEOUT_MS, DEFAULT_UPSTREAM_URL, ENV_API_KEY,
  ENV_BIND_ADDR, ENV_UPSTREAM_TIMEOUT_MS, ENV_UPSTREAM_URL,
};
pub use env::Config;
