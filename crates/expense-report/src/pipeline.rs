//! The fetch → normalize → aggregate → render → deliver run

use expense_common::{ReportPeriod, Result};
use expense_config::{Config, PropertyNames};
use expense_graphs::{aggregate, monthly_table, ReportRenderer};
use expense_mailer::{Delivery, MailTransport, MessageComposer, SmtpMailer};
use expense_notion::{normalize_all, NotionClient, RecordFetcher, RecordSource};
use std::path::PathBuf;
use tracing::{info, instrument};

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub period: ReportPeriod,
    pub records_fetched: usize,
    pub rows_in_period: usize,
    pub aggregate_rows: usize,
    pub report_file: String,
}

/// One-shot report pipeline over a record source and a mail transport
pub struct ReportPipeline<S, M> {
    fetcher: RecordFetcher<S>,
    properties: PropertyNames,
    renderer: ReportRenderer,
    output_dir: PathBuf,
    delivery: Delivery<M>,
}

impl ReportPipeline<NotionClient, SmtpMailer> {
    /// Pipeline talking to the query API and the SMTP relay
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = NotionClient::new(&config.notion)?;
        let transport = SmtpMailer::new(&config.smtp)?;
        Self::new(source, transport, config)
    }
}

impl<S: RecordSource, M: MailTransport> ReportPipeline<S, M> {
    pub fn new(source: S, transport: M, config: &Config) -> Result<Self> {
        let composer = MessageComposer::from_config(&config.email)?;

        Ok(Self {
            fetcher: RecordFetcher::new(source).with_page_size(config.notion.page_size),
            properties: config.notion.properties.clone(),
            renderer: ReportRenderer::new(&config.report),
            output_dir: PathBuf::from(&config.report.output_dir),
            delivery: Delivery::new(transport, composer),
        })
    }

    pub fn source(&self) -> &S {
        self.fetcher.source()
    }

    pub fn transport(&self) -> &M {
        self.delivery.transport()
    }

    /// Run every stage once for `period`.
    ///
    /// With `limit`, only the first `limit` records are fetched in a single
    /// request. Any stage failing aborts the run; the report file is left on
    /// disk when it was written but not delivered.
    #[instrument(skip(self, period), fields(period = %period))]
    pub async fn run(&self, period: ReportPeriod, limit: Option<u32>) -> Result<RunSummary> {
        let records = match limit {
            Some(limit) => self.fetcher.fetch_first(limit).await?,
            None => self.fetcher.fetch_all().await?,
        };

        let rows = normalize_all(&records, &self.properties)?;
        let table = monthly_table(&rows, period);
        let aggregates = aggregate(&table);
        info!(
            "{} of {} expenses fall in {} ({} day/category totals)",
            table.len(),
            rows.len(),
            period,
            aggregates.len()
        );

        let document = self.renderer.render(period, &aggregates)?;
        let path = document.write_to(&self.output_dir)?;

        self.delivery.deliver(period, &path).await?;

        Ok(RunSummary {
            period,
            records_fetched: records.len(),
            rows_in_period: table.len(),
            aggregate_rows: aggregates.len(),
            report_file: document.file_name,
        })
    }
}
