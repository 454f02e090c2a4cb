//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod narrative_generator;
mod record_store;
mod registry_command;
mod registry_query;
mod report_command;
mod report_query;

#[cfg(test)]
pub use narrative_generator::MockNarrativeGenerator;
pub use narrative_generator::{NarrativeGenerator, NarrativeGeneratorError};
#[cfg(test)]
pub use record_store::MockRecordStore;
pub use record_store::{RecordStore, RecordStoreError};
#[cfg(test)]
pub use registry_command::MockRegistryCommand;
pub use registry_command::{
    CreateCaseRequest, CreateModelRequest, CreateUserRequest, RegistryCommand,
};
#[cfg(test)]
pub use registry_query::MockRegistryQuery;
pub use registry_query::RegistryQuery;
#[cfg(test)]
pub use report_command::MockReportCommand;
pub use report_command::{GenerateReportRequest, GeneratedReport, ReportCommand};
#[cfg(test)]
pub use report_query::MockReportQuery;
pub use report_query::{ReportDocument, ReportQuery};
