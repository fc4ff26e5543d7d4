//! Error types for the nhist stack.

use thiserror::Error;

/// nhist error type.
///
/// Capability probing and dispatch never produce runtime errors (absence of
/// a capability is `false`, misuse is a compile-time rejection); the variants
/// here cover the few numeric conversions that can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error
    #[error("validation error: {0}")]
    Validation(String),

    /// A compensated sum was not integral within tolerance
    #[error("sum value {value} is not integral within tolerance")]
    NonIntegral {
        /// The offending value (total + compensation).
        value: f64,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
