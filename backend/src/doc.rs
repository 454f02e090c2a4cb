//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: every HTTP endpoint from the inbound layer
//! - **Schemas**: domain type wrappers ([`ErrorSchema`], [`UserSchema`],
//!   [`CaseSchema`] and friends) that provide OpenAPI definitions without
//!   coupling domain types to the utoipa framework
//!
//! The generated specification is served by Swagger UI in debug builds.

use crate::inbound::http::schemas::{
    CaseSchema, ErrorCodeSchema, ErrorSchema, FlowSchema, InputFactorSchema, ModelSchema,
    ReportSummarySchema, StructuredReportSchema, TechniqueSchema, UserSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "XAI report API",
        description = "Registry of users, models and decision cases, and generation of \
                       explainability reports for high-impact automated decisions."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::health::health,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::techniques::list_techniques,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::models::list_models,
        crate::inbound::http::models::create_model,
        crate::inbound::http::cases::list_cases,
        crate::inbound::http::cases::create_case,
        crate::inbound::http::cases::get_case,
        crate::inbound::http::reports::generate_report,
        crate::inbound::http::reports::list_reports,
        crate::inbound::http::reports::get_report_document,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        UserSchema,
        FlowSchema,
        ModelSchema,
        InputFactorSchema,
        CaseSchema,
        TechniqueSchema,
        StructuredReportSchema,
        ReportSummarySchema
    )),
    tags(
        (name = "health", description = "Liveness and readiness checks"),
        (name = "catalogue", description = "Explainability technique catalogue"),
        (name = "users", description = "Registered users"),
        (name = "models", description = "Registered AI models"),
        (name = "cases", description = "Individual decision cases"),
        (name = "reports", description = "Generated explainability reports")
    )
)]
pub struct ApiDoc;
