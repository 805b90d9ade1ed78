//! Mail submission seam and the SMTP implementation

use async_trait::async_trait;
use expense_common::{Result, ReportError};
use expense_config::SmtpConfig;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Submits a finished message to every envelope recipient in one go.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: Message) -> Result<()>;
}

/// STARTTLS submission to an authenticated relay
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
}

impl SmtpMailer {
    /// Create a new mailer; no connection is made until the first send
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| ReportError::mail_with_source(format!("Invalid SMTP relay '{}'", config.host), e))?
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
            .timeout(Some(Duration::from_secs(config.timeout_seconds)))
            .build();

        debug!("Configured SMTP relay {}:{}", config.host, config.port);
        Ok(Self {
            transport,
            host: config.host.clone(),
        })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    #[instrument(skip_all, fields(relay = %self.host))]
    async fn send(&self, message: Message) -> Result<()> {
        let recipients = message.envelope().to().len();
        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| ReportError::mail_with_source("SMTP submission failed", e))?;

        info!(
            "Relay accepted message for {} recipients (code {})",
            recipients, response.code()
        );
        Ok(())
    }
}
