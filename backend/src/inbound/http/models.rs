//! Model registration handlers.
//!
//! ```text
//! GET /api/models?userId=<uuid>
//! POST /api/models {"userId":"…","name":"credit-model","techniques":["shap"]}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Model;
use crate::domain::ports::CreateModelRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, ModelSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{JsonBody, OwnerFilter};

/// Request body for `POST /api/models`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateModelBody {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub objective: Option<String>,
    pub model_type: Option<String>,
    pub inputs: Option<Vec<String>>,
    /// `questionnaire` or anything else for `upload`.
    pub flow: Option<String>,
    /// Null entries are dropped.
    pub techniques: Option<Vec<Option<String>>>,
}

impl From<CreateModelBody> for CreateModelRequest {
    fn from(value: CreateModelBody) -> Self {
        Self {
            user_id: value.user_id,
            name: value.name,
            objective: value.objective,
            model_type: value.model_type,
            inputs: value.inputs.unwrap_or_default(),
            flow: value.flow,
            techniques: value.techniques.into_iter().flatten().flatten().collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModelResponse {
    #[schema(value_type = ModelSchema)]
    pub model: Model,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModelsResponse {
    #[schema(value_type = Vec<ModelSchema>)]
    pub models: Vec<Model>,
}

/// Register a model for an existing user.
#[utoipa::path(
    post,
    path = "/api/models",
    request_body = CreateModelBody,
    responses(
        (status = 201, description = "Model registered", body = ModelResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Owner not found", body = ErrorSchema),
        (status = 413, description = "Body too large", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["models"],
    operation_id = "createModel"
)]
#[post("/models")]
pub async fn create_model(
    state: web::Data<HttpState>,
    payload: JsonBody<CreateModelBody>,
) -> ApiResult<HttpResponse> {
    let model = state
        .registry
        .create_model(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(ModelResponse { model }))
}

/// List models, optionally restricted to one owner.
#[utoipa::path(
    get,
    path = "/api/models",
    params(("userId" = Option<String>, Query, description = "Owner filter; blank lists everyone")),
    responses(
        (status = 200, description = "Models", body = ModelsResponse),
        (status = 400, description = "Malformed owner id", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["models"],
    operation_id = "listModels"
)]
#[get("/models")]
pub async fn list_models(
    state: web::Data<HttpState>,
    filter: web::Query<OwnerFilter>,
) -> ApiResult<web::Json<ModelsResponse>> {
    let owner = filter.into_inner().parse()?;
    let models = state.registry_query.list_models(owner).await?;
    Ok(web::Json(ModelsResponse { models }))
}
