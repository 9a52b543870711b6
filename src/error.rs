//! Error types for network construction

use thiserror::Error;

/// Result type for network construction
pub type Result<T> = std::result::Result<T, ConfigError>;

/// A rejected network configuration
///
/// Raised synchronously at construction time; forward passes on a
/// successfully constructed network do not fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The activation identifier is not one of the supported ones
    #[error("unsupported activation `{0}`, expected `relu` or `silu`")]
    UnsupportedActivation(String),

    /// A layer dimension that must be positive was zero
    #[error("`{0}` must be positive")]
    ZeroDimension(&'static str),
}
