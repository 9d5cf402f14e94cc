//! Request and result types for the authentication service
//!
//! Request fields are optional so that missing input is reported with the
//! same messages regardless of how the caller decoded it.

use crate::domain::entities::Role;

#[derive(Debug, Clone, Default)]
pub struct RegistrationRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    /// Sellers only
    pub phone_number: Option<String>,
    /// Sellers only
    pub country: Option<String>,
}

/// OTP confirmation that creates the account
#[derive(Debug, Clone, Default)]
pub struct VerifyAccountRequest {
    pub email: Option<String>,
    pub otp: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordRequest {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct VerifyResetOtpRequest {
    pub email: Option<String>,
    pub otp: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ResetPasswordRequest {
    pub email: Option<String>,
    pub new_password: Option<String>,
}

/// New access token minted from a refresh token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshedSession {
    pub role: Role,
    pub access_token: String,
}
