//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT secrets, token lifetimes and cookie attributes
//! - `cache` - Key-value store backend and Redis connection
//! - `database` - Relational store connection and pool
//! - `environment` - Environment detection and logging
//! - `mail` - Transactional mail transport
//! - `otp` - OTP lifetimes, cooldowns and lockout thresholds
//! - `payment` - Payment vendor onboarding API
//! - `server` - HTTP bind address

pub mod auth;
pub mod cache;
pub mod database;
pub mod environment;
pub mod mail;
pub mod otp;
pub mod payment;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, CookieConfig};
pub use cache::{CacheBackend, CacheConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use mail::{MailConfig, MailProvider};
pub use otp::OtpConfig;
pub use payment::PaymentConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub auth: AuthConfig,
    pub otp: OtpConfig,
    pub mail: MailConfig,
    pub payment: PaymentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            auth: AuthConfig::default(),
            otp: OtpConfig::default(),
            mail: MailConfig::default(),
            payment: PaymentConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    ///
    /// Call `dotenvy::dotenv()` before this if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        let mut auth = AuthConfig::from_env();
        // Cookies are only marked secure outside development unless told otherwise
        if std::env::var("COOKIE_SECURE").is_err() {
            auth.cookie.secure = !environment.is_development();
        }

        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            auth,
            otp: OtpConfig::from_env(),
            mail: MailConfig::from_env(),
            payment: PaymentConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }
}

/// Read an environment variable and parse it, falling back to `default`
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
