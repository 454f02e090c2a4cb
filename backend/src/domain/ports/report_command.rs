//! Driving port for generating compliance reports.

use async_trait::async_trait;

use crate::domain::{Error, ReportOptions, StructuredReport};

/// Report generation request.
///
/// `user_id` and `case_id` are required; the case must belong to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReportRequest {
    pub user_id: Option<String>,
    pub case_id: Option<String>,
    pub options: ReportOptions,
}

/// Outcome of a successful generation, already persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReport {
    pub report: StructuredReport,
    pub narrative: String,
    pub document: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportCommand: Send + Sync {
    /// Synthesize, narrate, render and persist a report.
    ///
    /// Fails with `invalid_request` for missing ids and `not_found` when the
    /// user/case pair does not resolve. Narrative failures never surface.
    async fn generate_report(&self, request: GenerateReportRequest)
    -> Result<GeneratedReport, Error>;
}
