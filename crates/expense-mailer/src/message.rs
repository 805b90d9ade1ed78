//! Report email composition

use expense_common::{bail, ReportPeriod, Result, ReportError};
use expense_config::EmailConfig;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::Message;

/// MIME type the report is attached with
pub const ATTACHMENT_CONTENT_TYPE: &str = "application/octet-stream";

/// Subject line for the given month, e.g. `Monthly-Report for April`
pub fn subject_for(period: ReportPeriod) -> String {
    format!("Monthly-Report for {}", period.month_name())
}

/// Builds report messages from validated addressing.
#[derive(Debug, Clone)]
pub struct MessageComposer {
    sender: Mailbox,
    recipients: Vec<Mailbox>,
    body: String,
}

impl MessageComposer {
    /// Parse every address up front so a bad one fails before any work
    pub fn from_config(config: &EmailConfig) -> Result<Self> {
        let sender = parse_mailbox(&config.sender)?;
        let recipients = config
            .recipients
            .iter()
            .map(|recipient| parse_mailbox(recipient))
            .collect::<Result<Vec<_>>>()?;

        if recipients.is_empty() {
            bail!(ReportError::config("At least one recipient is required"));
        }

        Ok(Self {
            sender,
            recipients,
            body: config.body.clone(),
        })
    }

    pub fn recipients(&self) -> &[Mailbox] {
        &self.recipients
    }

    /// Message addressed to all recipients with the report attached under `file_name`
    pub fn compose(&self, period: ReportPeriod, file_name: &str, content: Vec<u8>) -> Result<Message> {
        let content_type = ContentType::parse(ATTACHMENT_CONTENT_TYPE)
            .map_err(|e| ReportError::mail(format!("Invalid attachment content type: {}", e)))?;

        let builder = self
            .recipients
            .iter()
            .cloned()
            .fold(Message::builder().from(self.sender.clone()), |builder, to| builder.to(to));

        builder
            .subject(subject_for(period))
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(self.body.clone()))
                    .singlepart(Attachment::new(file_name.to_string()).body(content, content_type)),
            )
            .map_err(|e| ReportError::mail_with_source("Failed to build report message", e))
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox> {
    address
        .parse()
        .map_err(|e| ReportError::config_with_source(format!("Invalid email address '{}'", address), e))
}
