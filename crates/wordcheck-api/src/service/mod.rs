//! Service module

mod dictionary_service;

pub use dictionary_service::{DictionaryApiService, LookupService};
