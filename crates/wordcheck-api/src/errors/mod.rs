//! errors module

mod error_definition;

pub use error_definition::{
  ApiError, ApiErrorKind, MISSING_WORD_MESSAGE, Result, UNEXPECTED_MESSAGE,
};
