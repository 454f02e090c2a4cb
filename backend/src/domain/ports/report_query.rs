//! Driving port for reading persisted reports.

use async_trait::async_trait;

use crate::domain::{Error, ReportId, ReportSummary, UserId};

/// Downloadable document for a persisted report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub report_id: ReportId,
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportQuery: Send + Sync {
    /// Fails with `not_found` for unknown ids; has no side effects.
    async fn fetch_document(&self, id: &ReportId) -> Result<ReportDocument, Error>;

    /// Summaries without document bodies, in append order.
    async fn list_reports(&self, owner: Option<UserId>) -> Result<Vec<ReportSummary>, Error>;
}
