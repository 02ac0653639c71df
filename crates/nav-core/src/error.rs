//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `NavError` where a core
//! failure can surface through them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("invalid coordinate ({lat}, {lon}): components must be finite")]
    InvalidCoordinate { lat: f64, lon: f64 },
}

/// Shorthand result type for `nav-core`.
pub type NavResult<T> = Result<T, NavError>;
