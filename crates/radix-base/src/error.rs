//! Unified error types for radix.

use thiserror::Error;

/// The main error type for radix operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Two sequences that must be zipped together differ in length.
    #[error("Length mismatch: {literals} literals but {weights} weights")]
    LengthMismatch { literals: usize, weights: usize },

    /// A numeral base contains a radix below 2.
    #[error("Invalid radix {radix} at digit {position}")]
    InvalidRadix { position: usize, radix: u64 },

    /// A threshold or weighted sum does not fit the integer range.
    #[error("Threshold overflow: {0}")]
    ThresholdOverflow(String),

    /// Malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
