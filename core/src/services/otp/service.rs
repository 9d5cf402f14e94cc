//! Main OTP service implementation

use bz_shared::config::OtpConfig;
use bz_shared::utils::mask_email;
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde_json::json;
use std::sync::Arc;

use crate::errors::{DomainError, DomainResult, ValidationError};

use super::keys;
use super::template::OtpTemplate;
use super::traits::{KeyValueStore, MailSender};

const OTP_SUBJECT: &str = "Verify Your Email";

/// Issues and verifies email one-time passwords
pub struct OtpService {
    store: Arc<dyn KeyValueStore>,
    mailer: Arc<dyn MailSender>,
    config: OtpConfig,
}

impl OtpService {
    /// Create a new OTP service
    pub fn new(store: Arc<dyn KeyValueStore>, mailer: Arc<dyn MailSender>, config: OtpConfig) -> Self {
        Self {
            store,
            mailer,
            config,
        }
    }

    pub fn config(&self) -> &OtpConfig {
        &self.config
    }

    /// Reject issuance while a lockout, spam lock or cooldown is active
    ///
    /// Checked in that order; the first active one wins. Read-only.
    pub async fn check_restrictions(&self, email: &str) -> DomainResult<()> {
        if self.exists(&keys::lock(email)).await? {
            tracing::warn!(email = %mask_email(email), event = "otp_locked", "OTP issuance blocked by lockout");
            return Err(ValidationError::OtpLocked.into());
        }
        if self.exists(&keys::spam_lock(email)).await? {
            tracing::warn!(email = %mask_email(email), event = "otp_spam_locked", "OTP issuance blocked by spam lock");
            return Err(ValidationError::OtpSpamLocked.into());
        }
        if self.exists(&keys::cooldown(email)).await? {
            return Err(ValidationError::OtpCooldown.into());
        }
        Ok(())
    }

    /// Count this request in the rolling window
    ///
    /// Once the window already holds `max_requests` sends, the request is
    /// refused and the spam lock is set.
    pub async fn track_request(&self, email: &str) -> DomainResult<()> {
        let count = self
            .store
            .incr_with_ttl(&keys::request_count(email), self.config.request_window_seconds)
            .await
            .map_err(cache_error)?;

        if count > self.config.max_requests {
            self.store
                .set_with_ttl(&keys::spam_lock(email), "locked", self.config.spam_lock_seconds)
                .await
                .map_err(cache_error)?;

            tracing::warn!(
                email = %mask_email(email),
                count = count,
                event = "otp_spam_lock_set",
                "Too many OTP requests in window"
            );
            return Err(ValidationError::OtpRequestLimitReached.into());
        }
        Ok(())
    }

    /// Generate a code, mail it, then store it and start the cooldown
    ///
    /// Nothing is stored if the mail cannot be sent.
    pub async fn send_otp(&self, name: &str, email: &str, template: OtpTemplate) -> DomainResult<()> {
        let code = Self::generate_code();

        self.mailer
            .send_mail(email, OTP_SUBJECT, template, &json!({ "name": name, "otp": code }))
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(email),
                    template = %template,
                    error = %e,
                    event = "otp_mail_failed",
                    "Failed to send OTP mail"
                );
                DomainError::internal(format!("Failed to send OTP mail: {}", e))
            })?;

        self.store
            .set_with_ttl(&keys::otp(email), &code, self.config.code_ttl_seconds)
            .await
            .map_err(cache_error)?;
        self.store
            .set_with_ttl(&keys::cooldown(email), "true", self.config.cooldown_seconds)
            .await
            .map_err(cache_error)?;

        tracing::info!(
            email = %mask_email(email),
            template = %template,
            event = "otp_sent",
            "OTP sent"
        );
        Ok(())
    }

    /// Gate, count and dispatch in one call
    pub async fn issue(&self, name: &str, email: &str, template: OtpTemplate) -> DomainResult<()> {
        self.check_restrictions(email).await?;
        self.track_request(email).await?;
        self.send_otp(name, email, template).await
    }

    /// Check a submitted code
    ///
    /// A match clears the code and the attempt counter. A mismatch bumps the
    /// counter; reaching `max_failed_attempts` sets the lockout and discards
    /// the code.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> DomainResult<()> {
        let otp_key = keys::otp(email);
        let attempts_key = keys::attempts(email);

        let stored = self.store.get(&otp_key).await.map_err(cache_error)?;
        let Some(stored) = stored else {
            return Err(ValidationError::OtpExpired.into());
        };

        if constant_time_eq(stored.as_bytes(), otp.trim().as_bytes()) {
            self.store
                .delete(&[otp_key.as_str(), attempts_key.as_str()])
                .await
                .map_err(cache_error)?;
            tracing::info!(email = %mask_email(email), event = "otp_verified", "OTP verified");
            return Ok(());
        }

        let failed = self
            .store
            .incr_with_ttl(&attempts_key, self.config.attempts_ttl_seconds)
            .await
            .map_err(cache_error)?;

        if failed >= self.config.max_failed_attempts {
            self.store
                .set_with_ttl(&keys::lock(email), "locked", self.config.lock_seconds)
                .await
                .map_err(cache_error)?;
            self.store
                .delete(&[otp_key.as_str(), attempts_key.as_str()])
                .await
                .map_err(cache_error)?;

            tracing::warn!(
                email = %mask_email(email),
                attempts = failed,
                event = "otp_lockout",
                "Too many failed OTP attempts"
            );
            return Err(ValidationError::OtpAttemptsExceeded {
                minutes: self.config.lock_minutes(),
            }
            .into());
        }

        tracing::debug!(email = %mask_email(email), attempts = failed, event = "otp_mismatch");
        Err(ValidationError::OtpIncorrect {
            remaining: self.config.max_failed_attempts - failed,
        }
        .into())
    }

    /// Record that a forgot-password OTP was verified for this email
    ///
    /// Lives as long as a code would.
    pub async fn mark_reset_verified(&self, email: &str) -> DomainResult<()> {
        self.store
            .set_with_ttl(&keys::reset_verified(email), "true", self.config.code_ttl_seconds)
            .await
            .map_err(cache_error)
    }

    pub async fn is_reset_verified(&self, email: &str) -> DomainResult<bool> {
        self.exists(&keys::reset_verified(email)).await
    }

    /// Take the reset verification, returning whether it was still there
    ///
    /// Of two concurrent callers only one sees `true`.
    pub async fn consume_reset_verification(&self, email: &str) -> DomainResult<bool> {
        let key = keys::reset_verified(email);
        let removed = self.store.delete(&[key.as_str()]).await.map_err(cache_error)?;
        Ok(removed > 0)
    }

    /// Generate a 4-digit code in 1000..=9999 from the OS CSPRNG
    pub fn generate_code() -> String {
        OsRng.gen_range(1000u32..=9999).to_string()
    }

    async fn exists(&self, key: &str) -> DomainResult<bool> {
        Ok(self.store.get(key).await.map_err(cache_error)?.is_some())
    }
}

fn cache_error(e: String) -> DomainError {
    tracing::error!(error = %e, event = "cache_error", "OTP store operation failed");
    DomainError::internal(format!("Cache error: {}", e))
}
