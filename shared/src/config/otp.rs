//! OTP configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// Lifetimes and thresholds for the email OTP flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Lifetime of an issued code in seconds
    pub code_ttl_seconds: u64,

    /// Minimum wait between two sends in seconds
    pub cooldown_seconds: u64,

    /// Rolling window for counting sends in seconds
    pub request_window_seconds: u64,

    /// Sends allowed in one window before the spam lock engages
    pub max_requests: u64,

    /// Spam lock duration in seconds
    pub spam_lock_seconds: u64,

    /// Lifetime of the failed-attempt counter in seconds
    pub attempts_ttl_seconds: u64,

    /// Failed verifications that trigger the lockout
    pub max_failed_attempts: u64,

    /// Lockout duration in seconds
    pub lock_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: 300,
            cooldown_seconds: 60,
            request_window_seconds: 3600,
            max_requests: 2,
            spam_lock_seconds: 3600,
            attempts_ttl_seconds: 300,
            max_failed_attempts: 3,
            lock_seconds: 1800,
        }
    }
}

impl OtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            code_ttl_seconds: env_or("OTP_TTL_SECONDS", defaults.code_ttl_seconds),
            cooldown_seconds: env_or("OTP_COOLDOWN_SECONDS", defaults.cooldown_seconds),
            request_window_seconds: env_or(
                "OTP_REQUEST_WINDOW_SECONDS",
                defaults.request_window_seconds,
            ),
            max_requests: env_or("OTP_MAX_REQUESTS", defaults.max_requests),
            spam_lock_seconds: env_or("OTP_SPAM_LOCK_SECONDS", defaults.spam_lock_seconds),
            attempts_ttl_seconds: env_or(
                "OTP_ATTEMPTS_TTL_SECONDS",
                defaults.attempts_ttl_seconds,
            ),
            max_failed_attempts: env_or("OTP_MAX_FAILED_ATTEMPTS", defaults.max_failed_attempts),
            lock_seconds: env_or("OTP_LOCK_SECONDS", defaults.lock_seconds),
        }
    }

    /// Lockout duration in whole minutes, as shown to the caller
    pub fn lock_minutes(&self) -> u64 {
        self.lock_seconds / 60
    }
}
