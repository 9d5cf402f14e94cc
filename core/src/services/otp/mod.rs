//! Email OTP workflow
//!
//! This module gates registration and password reset behind a one-time code:
//! - Issuance gate (lockout, spam lock, cooldown)
//! - Windowed request counting with spam-lock escalation
//! - Code generation and dispatch through a mail collaborator
//! - Verification with failed-attempt tracking and lockout
//!
//! All state lives in an expiring key-value store behind [`KeyValueStore`].

pub mod keys;
mod service;
mod template;
mod traits;

#[cfg(test)]
pub(crate) mod tests;

pub use service::OtpService;
pub use template::OtpTemplate;
pub use traits::{KeyValueStore, MailSender};
