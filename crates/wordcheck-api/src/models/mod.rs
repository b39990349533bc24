//! モデルモジュール

mod request;

pub use request::LookupRequest;
pub use wordcheck::LookupResult as LookupResponse;
