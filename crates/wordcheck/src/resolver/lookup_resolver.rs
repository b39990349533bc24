//! Lookup Resolver
//!
//! Decides from one upstream payload whether the requested word is defined.
//! Pure function: no I/O, never fails.

use tracing::trace;

use crate::models::{DefinitionalEntry, LookupResult, UpstreamPayload};

use super::normalization::normalize;

/// Maximum number of definitions returned for a known word
pub const MAX_DEFINITIONS: usize = 5;

/// Maximum number of suggestions returned for an unknown word
pub const MAX_SUGGESTIONS: usize = 8;

/// Whether `entry` is an exact match for `word`.
///
/// Compares the normalized word against the headword (syllable markers removed)
/// and against the base id.
pub fn is_exact_match(entry: &DefinitionalEntry, word: &str) -> bool {
  let key = normalize(word);
  matches_key(entry, &key)
}

fn matches_key(entry: &DefinitionalEntry, key: &str) -> bool {
  normalize(&entry.bare_headword()) == key || normalize(entry.base_id()) == key
}

/// Classifies `payload` for the requested `word`.
///
/// - If any entry object has short definitions, the word is known. The first
///   exact match wins; otherwise the first definitional entry in payload order.
///   Its definitions are cut to [`MAX_DEFINITIONS`].
/// - Otherwise the word is unknown and the suggestion strings, in payload order,
///   are cut to [`MAX_SUGGESTIONS`].
///
/// `word` is trimmed but not normalized in the result.
pub fn resolve(word: &str, payload: &UpstreamPayload) -> LookupResult {
  let word = word.trim();
  let key = normalize(word);

  let first_definitional = payload.objects().find(|entry| entry.is_definitional());

  let Some(first_definitional) = first_definitional else {
    let suggestions: Vec<String> =
      payload.suggestions().take(MAX_SUGGESTIONS).map(str::to_string).collect();
    trace!(word, suggestions = suggestions.len(), "no definitional entry");
    return LookupResult::undefined(word, suggestions);
  };

  // An exact match may itself lack definitions; it still wins.
  let pick = payload
    .objects()
    .find(|entry| matches_key(entry, &key))
    .unwrap_or(first_definitional);

  trace!(word, entry_id = %pick.entry_id, "picked entry");

  let definitions = pick.short_definitions.iter().take(MAX_DEFINITIONS).cloned().collect();
  LookupResult::defined(word, definitions)
}
