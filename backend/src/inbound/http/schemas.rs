//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the serialised structure of their corresponding
//! domain types but live in the inbound adapter layer where framework
//! concerns belong.

#![expect(
    dead_code,
    reason = "Schema wrappers are only used for OpenAPI generation via utoipa"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// A referenced record does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request body exceeds the configured ceiling.
    #[schema(rename = "payload_too_large")]
    PayloadTooLarge,
    /// A dependency is temporarily unavailable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// API error response payload with machine-readable code and human-readable
/// message.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "missing required fields: personName")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User, rename_all = "camelCase")]
pub struct UserSchema {
    #[schema(format = "uuid")]
    id: String,
    #[schema(example = "Ana Pérez")]
    full_name: String,
    #[schema(example = "ana@example.com")]
    email: String,
    #[schema(format = "date-time")]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::Flow`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Flow)]
pub enum FlowSchema {
    #[schema(rename = "upload")]
    Upload,
    #[schema(rename = "questionnaire")]
    Questionnaire,
}

/// OpenAPI schema for [`crate::domain::Model`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Model, rename_all = "camelCase")]
pub struct ModelSchema {
    #[schema(format = "uuid")]
    id: String,
    #[schema(format = "uuid")]
    user_id: String,
    #[schema(example = "credit-model")]
    name: String,
    objective: String,
    #[schema(example = "xgboost")]
    model_type: Option<String>,
    inputs: Vec<String>,
    flow: FlowSchema,
    /// Catalogue technique ids; not validated.
    techniques: Vec<String>,
    #[schema(format = "date-time")]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::InputFactor`].
#[derive(ToSchema)]
#[schema(as = crate::domain::InputFactor)]
pub struct InputFactorSchema {
    #[schema(example = "ingresos")]
    name: String,
    #[schema(example = "1100")]
    value: String,
}

/// OpenAPI schema for [`crate::domain::Case`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Case, rename_all = "camelCase")]
pub struct CaseSchema {
    #[schema(format = "uuid")]
    id: String,
    #[schema(format = "uuid")]
    user_id: String,
    #[schema(format = "uuid")]
    model_id: Option<String>,
    #[schema(example = "Luis Martín")]
    person_name: String,
    person_identifier: Option<String>,
    #[schema(example = "Denegado")]
    decision: String,
    input_values: Vec<InputFactorSchema>,
    #[schema(format = "date-time")]
    created_at: String,
}

/// OpenAPI schema for [`crate::domain::Technique`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Technique)]
pub struct TechniqueSchema {
    #[schema(example = "shap")]
    id: String,
    #[schema(example = "SHAP")]
    name: String,
    #[schema(rename = "type", example = "global-local")]
    kind: String,
    summary: String,
}

/// OpenAPI schema for [`crate::domain::StructuredReport`].
///
/// Sections are documented as free-form objects; their fields follow the
/// domain type's camelCase serialisation.
#[derive(ToSchema)]
#[schema(as = crate::domain::StructuredReport, rename_all = "camelCase")]
pub struct StructuredReportSchema {
    metadata: serde_json::Value,
    subject: serde_json::Value,
    model_context: serde_json::Value,
    explainability: serde_json::Value,
    compliance: serde_json::Value,
    limitations: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::ReportSummary`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ReportSummary, rename_all = "camelCase")]
pub struct ReportSummarySchema {
    #[schema(format = "uuid")]
    id: String,
    #[schema(format = "uuid")]
    user_id: String,
    #[schema(format = "uuid")]
    case_id: String,
    #[schema(format = "date-time")]
    created_at: String,
    narrative: String,
}
