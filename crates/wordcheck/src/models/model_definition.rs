//! Data Model Definition
//!
//! The dictionary provider answers with a JSON array that mixes two shapes:
//! entry objects when the word is known, bare strings (spelling suggestions)
//! when it is not. Both are read into [`UpstreamEntry`] here, so nothing
//! downstream has to look at raw JSON.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::errors::WordcheckResult;

/// Label reported in every [`LookupResult::source`].
pub const SOURCE_LABEL: &str = "Merriam-Webster Collegiate Dictionary";

/// Characters the provider inserts into headwords to mark syllable breaks.
///
/// Merriam-Webster uses `*` (`"ab*a*cus"`); `‧` (U+2027) shows up in other feeds.
pub const SYLLABLE_MARKERS: [char; 2] = ['*', '\u{2027}'];

/// Dictionary entry object from the upstream payload
///
/// Fields that are missing or of an unexpected JSON type are read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionalEntry {
  /// Headword (`hwi.hw`), possibly containing syllable markers
  pub headword: String,

  /// Entry id (`meta.id`), e.g. `"test:1"`
  pub entry_id: String,

  /// Short definitions (`shortdef`) in provider order
  pub short_definitions: Vec<String>,
}

impl DefinitionalEntry {
  /// Constructor for DefinitionalEntry
  pub fn new<I, S>(
    headword: impl Into<String>,
    entry_id: impl Into<String>,
    short_definitions: I,
  ) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      headword: headword.into(),
      entry_id: entry_id.into(),
      short_definitions: short_definitions.into_iter().map(Into::into).collect(),
    }
  }

  /// Reads an entry from one JSON object of the provider response.
  ///
  /// Non-string items inside `shortdef` are skipped.
  pub fn from_object(object: &Map<String, JsonValue>) -> Self {
    let headword = object
      .get("hwi")
      .and_then(|hwi| hwi.get("hw"))
      .and_then(JsonValue::as_str)
      .unwrap_or_default()
      .to_string();

    let entry_id = object
      .get("meta")
      .and_then(|meta| meta.get("id"))
      .and_then(JsonValue::as_str)
      .unwrap_or_default()
      .to_string();

    let short_definitions = object
      .get("shortdef")
      .and_then(JsonValue::as_array)
      .map(|defs| defs.iter().filter_map(JsonValue::as_str).map(str::to_string).collect())
      .unwrap_or_default();

    Self {
      headword,
      entry_id,
      short_definitions,
    }
  }

  /// Entry id without the homograph suffix: `"test:1"` → `"test"`.
  pub fn base_id(&self) -> &str {
    match self.entry_id.split_once(':') {
      Some((base, _)) => base,
      None => &self.entry_id,
    }
  }

  /// Headword with syllable markers removed: `"ab*a*cus"` → `"abacus"`.
  pub fn bare_headword(&self) -> String {
    self.headword.chars().filter(|c| !SYLLABLE_MARKERS.contains(c)).collect()
  }

  /// Whether the entry carries at least one short definition
  pub fn is_definitional(&self) -> bool {
    !self.short_definitions.is_empty()
  }
}

/// One element of the upstream payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamEntry {
  /// Entry object (definition candidate)
  Definitional(DefinitionalEntry),
  /// Bare string (spelling suggestion)
  Suggestion(String),
}

impl UpstreamEntry {
  /// Classifies a JSON element. Anything other than an object or a string yields `None`.
  pub fn from_value(value: JsonValue) -> Option<Self> {
    match value {
      JsonValue::Object(object) => {
        Some(Self::Definitional(DefinitionalEntry::from_object(&object)))
      }
      JsonValue::String(suggestion) => Some(Self::Suggestion(suggestion)),
      _ => None,
    }
  }
}

/// Parsed upstream payload, in provider order
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "JsonValue")]
pub struct UpstreamPayload {
  /// Entries in provider order
  pub entries: Vec<UpstreamEntry>,
}

impl UpstreamPayload {
  /// Builds a payload from any JSON value.
  ///
  /// A value that is not an array has no entries.
  pub fn from_value(value: JsonValue) -> Self {
    match value {
      JsonValue::Array(items) => items.into_iter().filter_map(UpstreamEntry::from_value).collect(),
      _ => Self::default(),
    }
  }

  /// Parses raw response bytes.
  ///
  /// # Errors
  /// Returns [`WordcheckError::MalformedPayload`](crate::errors::WordcheckError::MalformedPayload)
  /// if the bytes are not valid JSON. Valid JSON of any shape is accepted.
  pub fn from_slice(bytes: &[u8]) -> WordcheckResult<Self> {
    Ok(serde_json::from_slice(bytes)?)
  }

  /// Entry objects in payload order
  pub fn objects(&self) -> impl Iterator<Item = &DefinitionalEntry> {
    self.entries.iter().filter_map(|entry| match entry {
      UpstreamEntry::Definitional(object) => Some(object),
      UpstreamEntry::Suggestion(_) => None,
    })
  }

  /// Suggestion strings in payload order
  pub fn suggestions(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().filter_map(|entry| match entry {
      UpstreamEntry::Suggestion(suggestion) => Some(suggestion.as_str()),
      UpstreamEntry::Definitional(_) => None,
    })
  }

  /// Whether the payload has no usable entries
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl From<JsonValue> for UpstreamPayload {
  fn from(value: JsonValue) -> Self {
    Self::from_value(value)
  }
}

impl FromIterator<UpstreamEntry> for UpstreamPayload {
  fn from_iter<T: IntoIterator<Item = UpstreamEntry>>(iter: T) -> Self {
    Self {
      entries: iter.into_iter().collect(),
    }
  }
}

/// Lookup result returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
  /// Requested word (trimmed, not normalized)
  pub word: String,

  /// Whether the dictionary knows the word
  pub is_word: bool,

  /// Up to 5 short definitions of the picked entry
  pub definitions: Vec<String>,

  /// Up to 8 spelling suggestions
  pub suggestions: Vec<String>,

  /// Dictionary label
  pub source: String,
}

impl LookupResult {
  /// Result for a known word
  pub fn defined(word: impl Into<String>, definitions: Vec<String>) -> Self {
    Self {
      word: word.into(),
      is_word: true,
      definitions,
      suggestions: Vec::new(),
      source: SOURCE_LABEL.to_string(),
    }
  }

  /// Result for an unknown word
  pub fn undefined(word: impl Into<String>, suggestions: Vec<String>) -> Self {
    Self {
      word: word.into(),
      is_word: false,
      definitions: Vec::new(),
      suggestions,
      source: SOURCE_LABEL.to_string(),
    }
  }
}
