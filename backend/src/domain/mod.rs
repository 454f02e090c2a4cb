//! Domain primitives, aggregates and services.
//!
//! Purpose: Define the records a report is built from, the pure report
//! pipeline (synthesis, narrative, rendering) and the services implementing
//! the driving ports. Nothing here depends on the HTTP adapter or a concrete
//! store.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic error payload.
//! - User, Model, Case: registered records read by report generation.
//! - StructuredReport: resolved aggregate produced by synthesis.
//! - ReportSynthesizer, NarrativeComposer, render_document: the pipeline.
//! - RegistryService, ReportService: driving port implementations.

pub mod case;
pub mod catalogue;
pub mod credential;
pub mod document;
pub mod error;
pub mod identifiers;
pub mod model;
pub mod narrative;
pub mod ports;
pub mod registry_service;
pub mod report;
pub mod report_service;
pub mod report_synthesis;
pub mod trace_id;
pub mod user;
pub(crate) mod validation;

#[cfg(test)]
pub(crate) mod fixtures;

pub use self::case::{Case, InputFactor};
pub use self::catalogue::{Technique, techniques};
pub use self::credential::{CredentialError, CredentialHash};
pub use self::document::{
    DOCUMENT_CONTENT_TYPE, DOCUMENT_TITLE, document_filename, escape_markup, render_document,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::identifiers::{CaseId, IdentifierValidationError, ModelId, ReportId, UserId};
pub use self::model::{Flow, Model};
pub use self::narrative::{ComposedNarrative, NarrativeComposer, TemplateNarrativeGenerator};
pub use self::registry_service::RegistryService;
pub use self::report::{
    Compliance, Explainability, ModelContext, OwnerUser, ReportMetadata, ReportOptions,
    ReportRecord, ReportSubject, ReportSummary, StructuredReport,
};
pub use self::report_service::ReportService;
pub use self::report_synthesis::{ReportSynthesizer, SynthesisInput, synthesize};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::User;
pub use self::validation::MissingFieldsError;
