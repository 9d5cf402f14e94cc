//! Authentication route handlers
//!
//! Registration, login, token refresh and password reset for users and
//! sellers.

pub mod password;
pub mod seller;
pub mod token;
pub mod user;

pub(crate) const OTP_SENT: &str =
    "OTP sent to your email. Please verify your account with the OTP.";
pub(crate) const LOGIN_SUCCESS: &str = "Login successful!";
