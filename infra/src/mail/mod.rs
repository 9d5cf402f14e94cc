//! Transactional mail
//!
//! `MailProvider::Smtp` delivers through an SMTP relay; `MailProvider::Mock`
//! logs instead of sending.

pub mod mock_mail;
pub mod smtp;
pub mod templates;

use std::sync::Arc;

use bz_core::services::MailSender;
use bz_shared::config::{MailConfig, MailProvider};

use crate::InfrastructureError;

pub use mock_mail::{MockMailSender, SentMail};
pub use smtp::SmtpMailSender;

/// Build the mail sender selected by `config.provider`
pub fn create_mail_sender(config: &MailConfig) -> Result<Arc<dyn MailSender>, InfrastructureError> {
    match config.provider {
        MailProvider::Smtp => Ok(Arc::new(SmtpMailSender::new(config)?)),
        MailProvider::Mock => {
            tracing::warn!("Using mock mail sender; OTP mails are logged, not delivered");
            Ok(Arc::new(MockMailSender::new()))
        }
    }
}
