//! Mock mail sender
//!
//! Logs mails instead of delivering them and keeps a copy of each one so
//! tests can read the code that was sent.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use bz_core::services::{MailSender, OtpTemplate};
use bz_shared::utils::mask_email;

/// A mail captured by `MockMailSender`
#[derive(Debug, Clone)]
pub struct SentMail {
    pub to: String,
    pub subject: String,
    pub template: OtpTemplate,
    pub data: serde_json::Value,
}

#[derive(Clone, Default)]
pub struct MockMailSender {
    outbox: Arc<Mutex<Vec<SentMail>>>,
}

impl MockMailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent(&self) -> Vec<SentMail> {
        self.outbox.lock().await.clone()
    }

    /// Code from the latest mail sent to `to`
    pub async fn last_code_for(&self, to: &str) -> Option<String> {
        self.outbox
            .lock()
            .await
            .iter()
            .rev()
            .find(|m| m.to == to)
            .and_then(|m| m.data.get("otp"))
            .and_then(|otp| otp.as_str())
            .map(str::to_string)
    }
}

#[async_trait]
impl MailSender for MockMailSender {
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        template: OtpTemplate,
        data: &serde_json::Value,
    ) -> Result<(), String> {
        info!(
            to = %mask_email(to),
            subject,
            template = %template,
            "[MOCK MAIL] not delivered"
        );
        tracing::debug!(data = %data, "[MOCK MAIL] payload");

        self.outbox.lock().await.push(SentMail {
            to: to.to_string(),
            subject: subject.to_string(),
            template,
            data: data.clone(),
        });
        Ok(())
    }
}
