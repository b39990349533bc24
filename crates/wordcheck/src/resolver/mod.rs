//! resolver module

pub mod lookup_resolver;
pub mod normalization;

/// Re-exports
pub use lookup_resolver::{MAX_DEFINITIONS, MAX_SUGGESTIONS, is_exact_match, resolve};
pub use normalization::normalize;
