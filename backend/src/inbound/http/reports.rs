//! Report generation and retrieval handlers.
//!
//! ```text
//! POST /api/report {"userId":"…","caseId":"…","flow":"upload"}
//! GET /api/reports?userId=<uuid>
//! GET /api/reports/{reportId}/document
//! ```

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{GenerateReportRequest, GeneratedReport};
use crate::domain::{Flow, ReportId, ReportOptions, ReportSummary, StructuredReport};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ReportSummarySchema, StructuredReportSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{JsonBody, OwnerFilter, parse_path_id};

/// Request body for `POST /api/report`.
///
/// Only `userId` and `caseId` are required; the rest override defaults in
/// the generated report.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateReportBody {
    pub user_id: Option<String>,
    pub case_id: Option<String>,
    /// `upload` or anything else for `questionnaire`.
    pub flow: Option<String>,
    /// Null entries are dropped; blank ones are ignored during synthesis.
    pub techniques: Option<Vec<Option<String>>>,
    pub objective: Option<String>,
    pub highlights: Option<String>,
    pub human_oversight: Option<String>,
    pub appeal_process: Option<String>,
    /// Used only when the case has no resolvable model.
    pub model_name: Option<String>,
}

impl From<GenerateReportBody> for GenerateReportRequest {
    fn from(value: GenerateReportBody) -> Self {
        Self {
            user_id: value.user_id,
            case_id: value.case_id,
            options: ReportOptions {
                flow: Flow::for_report(value.flow.as_deref()),
                techniques: value.techniques.into_iter().flatten().flatten().collect(),
                objective: value.objective,
                highlights: value.highlights,
                human_oversight: value.human_oversight,
                appeal_process: value.appeal_process,
                model_name: value.model_name,
            },
        }
    }
}

/// Response body for `POST /api/report`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateReportResponse {
    #[schema(format = "uuid")]
    pub report_id: String,
    #[schema(value_type = StructuredReportSchema)]
    pub report: StructuredReport,
    pub narrative: String,
    pub document_markup: String,
}

impl From<GeneratedReport> for GenerateReportResponse {
    fn from(value: GeneratedReport) -> Self {
        Self {
            report_id: value.report.id().to_string(),
            report: value.report,
            narrative: value.narrative,
            document_markup: value.document,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReportsResponse {
    #[schema(value_type = Vec<ReportSummarySchema>)]
    pub reports: Vec<ReportSummary>,
}

/// Generate and persist a compliance report for a case.
#[utoipa::path(
    post,
    path = "/api/report",
    request_body = GenerateReportBody,
    responses(
        (status = 200, description = "Report generated", body = GenerateReportResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "User or case not found", body = ErrorSchema),
        (status = 413, description = "Body too large", body = ErrorSchema),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["reports"],
    operation_id = "generateReport"
)]
#[post("/report")]
pub async fn generate_report(
    state: web::Data<HttpState>,
    payload: JsonBody<GenerateReportBody>,
) -> ApiResult<web::Json<GenerateReportResponse>> {
    let generated = state
        .reports
        .generate_report(payload.into_inner().into())
        .await?;
    Ok(web::Json(generated.into()))
}

/// List report summaries without document bodies.
#[utoipa::path(
    get,
    path = "/api/reports",
    params(("userId" = Option<String>, Query, description = "Owner filter; blank lists everyone")),
    responses(
        (status = 200, description = "Report summaries", body = ReportsResponse),
        (status = 400, description = "Malformed owner id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["reports"],
    operation_id = "listReports"
)]
#[get("/reports")]
pub async fn list_reports(
    state: web::Data<HttpState>,
    filter: web::Query<OwnerFilter>,
) -> ApiResult<web::Json<ReportsResponse>> {
    let owner = filter.into_inner().parse()?;
    let reports = state.reports_query.list_reports(owner).await?;
    Ok(web::Json(ReportsResponse { reports }))
}

/// Download the rendered document of a persisted report.
#[utoipa::path(
    get,
    path = "/api/reports/{report_id}/document",
    params(("report_id" = String, Path, description = "Report identifier")),
    responses(
        (
            status = 200,
            description = "Word-openable document",
            content_type = "application/msword",
            headers(("Content-Disposition" = String, description = "Attachment filename")),
            body = String
        ),
        (status = 400, description = "Malformed report id", body = ErrorSchema),
        (status = 404, description = "Report not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["reports"],
    operation_id = "getReportDocument"
)]
#[get("/reports/{report_id}/document")]
pub async fn get_report_document(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id: ReportId = parse_path_id("reportId", &path.into_inner())?;
    let document = state.reports_query.fetch_document(&id).await?;
    Ok(HttpResponse::Ok()
        .content_type(document.content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(document.filename)],
        })
        .body(document.body))
}

#[cfg(test)]
mod tests;
