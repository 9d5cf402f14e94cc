//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{AuthError, TokenError, ValidationError};

use thiserror::Error;

/// Core domain errors
///
/// Every service operation returns this type. The presentation layer maps
/// each variant to an HTTP status.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Bad input, conflicting state or OTP rate limiting
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Bad credentials or missing permissions
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Expired or malformed JWT
    #[error(transparent)]
    Token(#[from] TokenError),

    /// Store, cache, mail or payment provider failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Wrap a collaborator failure
    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
