//! Payment provider configuration

use serde::{Deserialize, Serialize};

/// Cashfree Easy Split vendor API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentConfig {
    /// Base URL, e.g. `https://sandbox.cashfree.com/pg`
    pub base_url: String,
    pub app_id: String,
    #[serde(skip_serializing)]
    pub secret_key: String,
    /// Value sent in the `x-api-version` header
    pub api_version: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("https://sandbox.cashfree.com/pg"),
            app_id: String::new(),
            secret_key: String::new(),
            api_version: String::from("2025-01-01"),
            timeout_secs: 30,
        }
    }
}

impl PaymentConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("CASHFREE_BASE_URL").unwrap_or(defaults.base_url),
            app_id: std::env::var("CASHFREE_APP_ID").unwrap_or(defaults.app_id),
            secret_key: std::env::var("CASHFREE_SECRET_KEY").unwrap_or(defaults.secret_key),
            api_version: std::env::var("CASHFREE_API_VERSION").unwrap_or(defaults.api_version),
            timeout_secs: super::env_or("CASHFREE_TIMEOUT_SECS", defaults.timeout_secs),
        }
    }

    /// Full URL of the vendor creation endpoint
    pub fn vendors_url(&self) -> String {
        format!("{}/easy-split/vendors", self.base_url.trim_end_matches('/'))
    }
}
