//! Mail configuration module

use serde::{Deserialize, Serialize};

use super::env_or;

/// Mail transport selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Real SMTP relay
    Smtp,
    /// Log-only sender for development and testing
    Mock,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "smtp" => Ok(MailProvider::Smtp),
            "mock" => Ok(MailProvider::Mock),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// SMTP mail configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    pub provider: MailProvider,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    #[serde(skip_serializing)]
    pub smtp_password: String,
    /// Display name used in the From header
    pub from_name: String,
    /// Address used in the From header; falls back to `smtp_user`
    #[serde(default)]
    pub from_address: Option<String>,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Mock,
            smtp_host: String::from("smtp.gmail.com"),
            smtp_port: 465,
            smtp_user: String::new(),
            smtp_password: String::new(),
            from_name: String::from("Bazaar"),
            from_address: None,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_or("MAIL_PROVIDER", defaults.provider),
            smtp_host: std::env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: env_or("SMTP_PORT", defaults.smtp_port),
            smtp_user: std::env::var("SMTP_USER").unwrap_or(defaults.smtp_user),
            smtp_password: std::env::var("SMTP_PASSWORD").unwrap_or(defaults.smtp_password),
            from_name: std::env::var("SMTP_FROM_NAME").unwrap_or(defaults.from_name),
            from_address: std::env::var("SMTP_FROM").ok().filter(|a| !a.is_empty()),
        }
    }

    /// Address placed in the From header
    pub fn sender_address(&self) -> &str {
        self.from_address.as_deref().unwrap_or(&self.smtp_user)
    }
}
