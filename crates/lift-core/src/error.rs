//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where they need to propagate it.

use thiserror::Error;

/// The top-level error type for `lift-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An invalid configuration value, rejected at construction time.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `lift-core` operations.
pub type CoreResult<T> = Result<T, CoreError>;
