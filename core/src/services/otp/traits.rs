//! Traits for cache and mail integration

use async_trait::async_trait;

use super::template::OtpTemplate;

/// Expiring key-value store holding OTP state
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a key; expired keys read as `None`
    async fn get(&self, key: &str) -> Result<Option<String>, String>;

    /// Write a key that expires after `ttl_seconds`
    async fn set_with_ttl(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String>;

    /// Remove keys, returning how many live keys were removed
    ///
    /// Missing keys are ignored. A single-key delete doubles as an atomic
    /// take of a flag.
    async fn delete(&self, keys: &[&str]) -> Result<u64, String>;

    /// Atomically increment a counter and reset its expiry, returning the new value
    ///
    /// A missing or expired counter starts from zero.
    async fn incr_with_ttl(&self, key: &str, ttl_seconds: u64) -> Result<u64, String>;
}

/// Transactional mail delivery
#[async_trait]
pub trait MailSender: Send + Sync {
    /// Render `template` with `data` and send it to `to`
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        template: OtpTemplate,
        data: &serde_json::Value,
    ) -> Result<(), String>;
}
