//! Authentication configuration: JWT signing and auth cookies

use serde::{Deserialize, Serialize};

use super::env_or;

const DEFAULT_ACCESS_SECRET: &str = "change-me-access-secret";
const DEFAULT_REFRESH_SECRET: &str = "change-me-refresh-secret";

/// JWT and cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Secret used to sign access tokens
    pub access_token_secret: String,

    /// Secret used to sign refresh tokens
    pub refresh_token_secret: String,

    /// Access token lifetime in minutes
    pub access_token_expiry_minutes: i64,

    /// Refresh token lifetime in days
    pub refresh_token_expiry_days: i64,

    /// bcrypt cost factor for password hashing
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,

    /// Attributes for the token cookies
    #[serde(default)]
    pub cookie: CookieConfig,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_token_secret: DEFAULT_ACCESS_SECRET.to_string(),
            refresh_token_secret: DEFAULT_REFRESH_SECRET.to_string(),
            access_token_expiry_minutes: 15,
            refresh_token_expiry_days: 7,
            bcrypt_cost: default_bcrypt_cost(),
            cookie: CookieConfig::default(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_token_secret: std::env::var("ACCESS_TOKEN_SECRET")
                .unwrap_or(defaults.access_token_secret),
            refresh_token_secret: std::env::var("REFRESH_TOKEN_SECRET")
                .unwrap_or(defaults.refresh_token_secret),
            access_token_expiry_minutes: env_or(
                "ACCESS_TOKEN_EXPIRY_MINUTES",
                defaults.access_token_expiry_minutes,
            ),
            refresh_token_expiry_days: env_or(
                "REFRESH_TOKEN_EXPIRY_DAYS",
                defaults.refresh_token_expiry_days,
            ),
            bcrypt_cost: env_or("BCRYPT_COST", defaults.bcrypt_cost),
            cookie: CookieConfig::from_env(),
        }
    }

    /// Check if either signing secret is still the built-in default
    pub fn is_using_default_secrets(&self) -> bool {
        self.access_token_secret == DEFAULT_ACCESS_SECRET
            || self.refresh_token_secret == DEFAULT_REFRESH_SECRET
    }
}

/// Attributes applied to the access/refresh token cookies
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Only send cookies over HTTPS
    pub secure: bool,

    /// SameSite attribute ("none", "lax", "strict")
    pub same_site: String,

    /// Cookie max-age in days
    pub max_age_days: i64,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            secure: true,
            same_site: String::from("none"),
            max_age_days: 7,
        }
    }
}

impl CookieConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secure: env_or("COOKIE_SECURE", defaults.secure),
            same_site: std::env::var("COOKIE_SAME_SITE").unwrap_or(defaults.same_site),
            max_age_days: env_or("COOKIE_MAX_AGE_DAYS", defaults.max_age_days),
        }
    }
}

fn default_bcrypt_cost() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_token_lifetimes() {
        let config = AuthConfig::default();
        assert_eq!(config.access_token_expiry_minutes, 15);
        assert_eq!(config.refresh_token_expiry_days, 7);
        assert_eq!(config.bcrypt_cost, 10);
        assert!(config.is_using_default_secrets());
    }

    #[test]
    fn test_from_env_reads_secrets() {
        temp_env::with_vars(
            [
                ("ACCESS_TOKEN_SECRET", Some("a-secret")),
                ("REFRESH_TOKEN_SECRET", Some("r-secret")),
            ],
            || {
                let config = AuthConfig::from_env();
                assert_eq!(config.access_token_secret, "a-secret");
                assert_eq!(config.refresh_token_secret, "r-secret");
                assert!(!config.is_using_default_secrets());
            },
        );
    }
}
