//! Report delivery and local artifact cleanup

use crate::message::MessageComposer;
use crate::transport::MailTransport;
use expense_common::{ReportPeriod, Result, ReportError};
use std::path::Path;
use tracing::{error, info, instrument};

/// Sends the report file and deletes it once the relay has accepted it.
pub struct Delivery<T> {
    transport: T,
    composer: MessageComposer,
}

impl<T: MailTransport> Delivery<T> {
    pub fn new(transport: T, composer: MessageComposer) -> Self {
        Self {
            transport,
            composer,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Email the file at `path` to every recipient.
    ///
    /// The file is removed only after a successful send; on any failure it
    /// stays on disk and the error is returned.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn deliver(&self, period: ReportPeriod, path: &Path) -> Result<()> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ReportError::mail(format!("Report path '{}' has no file name", path.display())))?;

        let content = tokio::fs::read(path).await?;
        let message = self.composer.compose(period, file_name, content)?;

        if let Err(e) = self.transport.send(message).await {
            error!("Delivery failed, keeping {}: {}", path.display(), e);
            return Err(e);
        }

        tokio::fs::remove_file(path).await?;
        info!(
            "Delivered {} to {} recipients and removed the local copy",
            file_name,
            self.composer.recipients().len()
        );
        Ok(())
    }
}
