//! Error types for the recibo-core library.

use thiserror::Error;

/// Main error type for the recibo library.
#[derive(Error, Debug)]
pub enum ReciboError {
    /// Text acquisition failed in the upstream provider.
    #[error("text acquisition failed: {0}")]
    Acquire(#[from] AcquireError),

    /// Input was not text at all.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Failure reported by a [`crate::TextSource`] implementation.
///
/// Acquisition providers (OCR engines, PDF text-layer readers) run outside
/// this crate; their failures are carried here as a message and surface as
/// an [`crate::Outcome::Failure`], never as a panic.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct AcquireError(pub String);

impl AcquireError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Result type for the recibo library.
pub type Result<T> = std::result::Result<T, ReciboError>;
