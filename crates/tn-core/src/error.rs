//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` where a
//! configuration problem can surface through them.

use thiserror::Error;

/// The base error type for `tn-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
