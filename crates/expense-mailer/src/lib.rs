//! # Expense Mailer
//!
//! Emails the rendered report to the configured recipients over an
//! authenticated STARTTLS relay and removes the local file afterwards.

pub mod delivery;
pub mod message;
pub mod transport;

pub use delivery::Delivery;
pub use message::{subject_for, MessageComposer};
pub use transport::{MailTransport, SmtpMailer};

#[cfg(any(test, feature = "testing"))]
pub use transport::MockMailTransport;
