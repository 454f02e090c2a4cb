//! Decision case handlers.
//!
//! ```text
//! GET /api/cases?userId=<uuid>
//! GET /api/cases/{caseId}
//! POST /api/cases {"userId":"…","personName":"Luis Martín","decision":"Denegado"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::ports::CreateCaseRequest;
use crate::domain::{Case, CaseId, InputFactor};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{CaseSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{JsonBody, OwnerFilter, parse_path_id};

const DEFAULT_FACTOR_NAME: &str = "input";

/// One input value as submitted by clients.
///
/// Values may be any JSON scalar; they are recorded as text.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct InputValueBody {
    pub name: Option<String>,
    #[schema(value_type = Object)]
    pub value: Value,
}

fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    }
}

impl From<InputValueBody> for InputFactor {
    fn from(value: InputValueBody) -> Self {
        let name = value
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FACTOR_NAME.to_owned());
        Self::new(name, value_text(value.value))
    }
}

/// Request body for `POST /api/cases`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCaseBody {
    pub user_id: Option<String>,
    /// Stored without being resolved; must be a well-formed id when present.
    pub model_id: Option<String>,
    pub person_name: Option<String>,
    pub person_identifier: Option<String>,
    pub decision: Option<String>,
    pub input_values: Option<Vec<InputValueBody>>,
}

impl From<CreateCaseBody> for CreateCaseRequest {
    fn from(value: CreateCaseBody) -> Self {
        Self {
            user_id: value.user_id,
            model_id: value.model_id,
            person_name: value.person_name,
            person_identifier: value.person_identifier,
            decision: value.decision,
            input_values: value
                .input_values
                .unwrap_or_default()
                .into_iter()
                .map(InputFactor::from)
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CaseResponse {
    #[schema(value_type = CaseSchema)]
    pub case: Case,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CasesResponse {
    #[schema(value_type = Vec<CaseSchema>)]
    pub cases: Vec<Case>,
}

/// Record a decision case for an existing user.
#[utoipa::path(
    post,
    path = "/api/cases",
    request_body = CreateCaseBody,
    responses(
        (status = 201, description = "Case recorded", body = CaseResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Owner not found", body = ErrorSchema),
        (status = 413, description = "Body too large", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["cases"],
    operation_id = "createCase"
)]
#[post("/cases")]
pub async fn create_case(
    state: web::Data<HttpState>,
    payload: JsonBody<CreateCaseBody>,
) -> ApiResult<HttpResponse> {
    let case = state
        .registry
        .create_case(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(CaseResponse { case }))
}

/// List cases, optionally restricted to one owner.
#[utoipa::path(
    get,
    path = "/api/cases",
    params(("userId" = Option<String>, Query, description = "Owner filter; blank lists everyone")),
    responses(
        (status = 200, description = "Cases", body = CasesResponse),
        (status = 400, description = "Malformed owner id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["cases"],
    operation_id = "listCases"
)]
#[get("/cases")]
pub async fn list_cases(
    state: web::Data<HttpState>,
    filter: web::Query<OwnerFilter>,
) -> ApiResult<web::Json<CasesResponse>> {
    let owner = filter.into_inner().parse()?;
    let cases = state.registry_query.list_cases(owner).await?;
    Ok(web::Json(CasesResponse { cases }))
}

/// Fetch one case by id.
#[utoipa::path(
    get,
    path = "/api/cases/{case_id}",
    params(("case_id" = String, Path, description = "Case identifier")),
    responses(
        (status = 200, description = "Case", body = CaseResponse),
        (status = 400, description = "Malformed case id", body = ErrorSchema),
        (status = 404, description = "Case not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["cases"],
    operation_id = "getCase"
)]
#[get("/cases/{case_id}")]
pub async fn get_case(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CaseResponse>> {
    let id: CaseId = parse_path_id("caseId", &path.into_inner())?;
    let case = state.registry_query.fetch_case(&id).await?;
    Ok(web::Json(CaseResponse { case }))
}
