//! Shared utilities and common types for the Bazaar auth service
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error body returned by every endpoint
//! - Email validation and masking helpers

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CacheBackend, CacheConfig, CookieConfig, DatabaseConfig, Environment,
    LoggingConfig, MailConfig, MailProvider, OtpConfig, PaymentConfig, ServerConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use utils::validation;
