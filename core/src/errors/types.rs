//! Error type definitions for validation, authentication and token handling
//!
//! Display strings are the exact messages returned to API clients.

use thiserror::Error;

use crate::domain::entities::Role;

/// Input validation and OTP flow rejections
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("All fields are required!")]
    AllFieldsRequired,

    #[error("Invalid email format!")]
    InvalidEmail,

    #[error("Email is required!")]
    EmailRequired,

    #[error("Email and password are required!")]
    EmailAndPasswordRequired,

    #[error("Email and OTP are required!")]
    EmailAndOtpRequired,

    #[error("Email and new password are required!")]
    EmailAndNewPasswordRequired,

    #[error("Seller ID is required")]
    SellerIdRequired,

    #[error("Invalid value for field: {field}")]
    InvalidField { field: String },

    #[error("{role} already exists with this email")]
    AccountAlreadyExists { role: Role },

    #[error("{role} not found!")]
    AccountNotFound { role: Role },

    #[error("{role} does not exist!")]
    AccountDoesNotExist { role: Role },

    #[error("Seller not found in db")]
    SellerNotFoundInDb,

    #[error("New password must be different from the old one!")]
    PasswordUnchanged,

    #[error("Please verify the OTP before resetting your password!")]
    ResetNotVerified,

    // Issuance gate
    #[error("Account locked due to multiple failed OTP attempts! Please try again later.")]
    OtpLocked,

    #[error("Too many OTP requests! Please try again after some time.")]
    OtpSpamLocked,

    #[error("Please wait 1 minute before requesting a new OTP!")]
    OtpCooldown,

    // Request tracker
    #[error("Too many OTP requests! Please wait 1 hour before requesting again.")]
    OtpRequestLimitReached,

    // Verifier
    #[error("OTP has expired. Please request a new one.")]
    OtpExpired,

    #[error("Incorrect OTP. {remaining} attempts left.")]
    OtpIncorrect { remaining: u64 },

    #[error("Too many failed attempts! Account locked for {minutes} minutes.")]
    OtpAttemptsExceeded { minutes: u64 },

    #[error("Unauthorized! No refresh token")]
    MissingRefreshToken,

    /// Payment provider refused the vendor registration
    #[error("{message}")]
    VendorRejected { message: String },
}

/// Authentication failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("{role} does not exist!")]
    AccountDoesNotExist { role: Role },

    #[error("Invalid email or password!")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Forbidden! {role} does not exist")]
    AccountGone { role: Role },

    #[error("Unauthorized! Token missing")]
    Unauthenticated,

    #[error("Access denied! {required} only")]
    InsufficientRole { required: Role },
}

impl AuthError {
    /// Whether the caller is known but not allowed (403 rather than 401)
    pub fn is_forbidden(&self) -> bool {
        matches!(
            self,
            AuthError::AccountGone { .. } | AuthError::InsufficientRole { .. }
        )
    }
}

/// JWT failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
