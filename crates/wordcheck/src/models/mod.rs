//! models module

pub mod model_definition;

/// Re-exports
pub use model_definition::{
  DefinitionalEntry, LookupResult, SOURCE_LABEL, SYLLABLE_MARKERS, UpstreamEntry, UpstreamPayload,
};
