//! Tests for domain error display strings and conversions

use crate::domain::entities::Role;
use crate::errors::{AuthError, DomainError, TokenError, ValidationError};

#[test]
fn test_role_interpolated_messages() {
    assert_eq!(
        ValidationError::AccountAlreadyExists { role: Role::User }.to_string(),
        "User already exists with this email"
    );
    assert_eq!(
        ValidationError::AccountNotFound { role: Role::Seller }.to_string(),
        "Seller not found!"
    );
    assert_eq!(
        AuthError::AccountDoesNotExist { role: Role::User }.to_string(),
        "User does not exist!"
    );
    assert_eq!(
        AuthError::AccountGone { role: Role::Seller }.to_string(),
        "Forbidden! Seller does not exist"
    );
}

#[test]
fn test_otp_messages() {
    assert_eq!(
        ValidationError::OtpIncorrect { remaining: 2 }.to_string(),
        "Incorrect OTP. 2 attempts left."
    );
    assert_eq!(
        ValidationError::OtpAttemptsExceeded { minutes: 30 }.to_string(),
        "Too many failed attempts! Account locked for 30 minutes."
    );
    assert_eq!(
        ValidationError::OtpCooldown.to_string(),
        "Please wait 1 minute before requesting a new OTP!"
    );
}

#[test]
fn test_bridging_keeps_message() {
    let err: DomainError = ValidationError::InvalidEmail.into();
    assert_eq!(err.to_string(), "Invalid email format!");
    assert!(matches!(err, DomainError::Validation(ValidationError::InvalidEmail)));

    let err: DomainError = TokenError::TokenExpired.into();
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));

    let err = DomainError::internal("redis down");
    assert_eq!(err.to_string(), "Internal error: redis down");
}

#[test]
fn test_forbidden_classification() {
    assert!(AuthError::InsufficientRole { required: Role::Seller }.is_forbidden());
    assert!(AuthError::AccountGone { role: Role::User }.is_forbidden());
    assert!(!AuthError::InvalidCredentials.is_forbidden());
    assert!(!AuthError::Unauthenticated.is_forbidden());
}
