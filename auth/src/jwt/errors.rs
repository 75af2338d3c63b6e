use thiserror::Error;

/// Error type for JWT operations.
///
/// Validation failures deliberately collapse into a single variant: callers
/// must not be able to tell a forged token from an expired one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("invalid or expired token")]
    InvalidOrExpired,
}
