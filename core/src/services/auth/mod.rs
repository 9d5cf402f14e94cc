//! Authentication service module
//!
//! Registration, login, token refresh and password reset for users and
//! sellers. Registration and reset are gated by the email OTP flow in
//! [`crate::services::otp`].

mod service;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use service::AuthService;
pub use types::{
    ForgotPasswordRequest, LoginRequest, RefreshedSession, RegistrationRequest,
    ResetPasswordRequest, VerifyAccountRequest, VerifyResetOtpRequest,
};
pub use validation::{validate_registration_data, ValidatedRegistration};
pub(crate) use validation::present;
