//! Driven port producing the human-readable narrative for a report.
//!
//! Two implementations exist: the deterministic template in the domain and
//! an external text-generation adapter constructed only when configured.

use async_trait::async_trait;

use crate::domain::StructuredReport;

use super::define_port_error;

define_port_error! {
    /// Failures raised by narrative generators.
    pub enum NarrativeGeneratorError {
        /// The service could not be reached or the request timed out.
        Transport { message: String } => "narrative service transport failed: {message}",
        /// The service answered with a non-success status.
        Status { status: u16, message: String } => "narrative service returned {status}: {message}",
        /// The response body could not be decoded.
        Decode { message: String } => "narrative service response invalid: {message}",
        /// The service produced no text.
        Empty => "narrative service returned no text",
        /// The call exceeded the composer's deadline.
        Timeout { seconds: u64 } => "narrative service exceeded {seconds}s deadline",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// Short label used in logs to identify the strategy.
    fn source(&self) -> &'static str;

    /// Produce narrative text for `report`.
    async fn generate(&self, report: &StructuredReport) -> Result<String, NarrativeGeneratorError>;
}
