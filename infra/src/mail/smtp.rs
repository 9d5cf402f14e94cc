//! SMTP mail delivery through lettre

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{debug, error};

use bz_core::services::{MailSender, OtpTemplate};
use bz_shared::config::MailConfig;
use bz_shared::utils::mask_email;

use super::templates;
use crate::InfrastructureError;

/// Port that expects STARTTLS instead of implicit TLS
const SUBMISSION_PORT: u16 = 587;

pub struct SmtpMailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailSender {
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let address: Address = config
            .sender_address()
            .parse()
            .map_err(|e| InfrastructureError::Config(format!("Invalid sender address: {}", e)))?;
        let from = Mailbox::new(Some(config.from_name.clone()), address);

        let builder = if config.smtp_port == SUBMISSION_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
        }
        .map_err(|e| InfrastructureError::Mail(format!("Invalid SMTP relay: {}", e)))?;

        let transport = builder
            .port(config.smtp_port)
            .credentials(Credentials::new(
                config.smtp_user.clone(),
                config.smtp_password.clone(),
            ))
            .build();

        debug!(host = %config.smtp_host, port = config.smtp_port, "SMTP transport configured");
        Ok(Self { transport, from })
    }

    fn build_message(
        &self,
        to: &str,
        subject: &str,
        html: String,
    ) -> Result<Message, InfrastructureError> {
        let recipient: Mailbox = to
            .parse()
            .map_err(|e| InfrastructureError::Mail(format!("Invalid recipient: {}", e)))?;

        Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html)
            .map_err(|e| InfrastructureError::Mail(e.to_string()))
    }
}

#[async_trait]
impl MailSender for SmtpMailSender {
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        template: OtpTemplate,
        data: &serde_json::Value,
    ) -> Result<(), String> {
        let message = self
            .build_message(to, subject, templates::render(template, data))
            .map_err(|e| e.to_string())?;

        self.transport.send(message).await.map_err(|e| {
            error!(to = %mask_email(to), template = %template, error = %e, "SMTP delivery failed");
            format!("SMTP delivery failed: {}", e)
        })?;

        debug!(to = %mask_email(to), template = %template, "Mail delivered");
        Ok(())
    }
}
