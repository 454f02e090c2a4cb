//! Users API handlers.
//!
//! ```text
//! GET /api/users
//! POST /api/users {"fullName":"Ana Pérez","email":"ana@example.com"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::User;
use crate::domain::ports::CreateUserRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::JsonBody;

/// Request body for `POST /api/users`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserBody {
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// Stored only as a salted hash.
    pub password: Option<String>,
}

impl From<CreateUserBody> for CreateUserRequest {
    fn from(value: CreateUserBody) -> Self {
        Self {
            full_name: value.full_name,
            email: value.email,
            password: value.password,
        }
    }
}

/// Response body for `POST /api/users`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(value_type = UserSchema)]
    pub user: User,
}

/// Response body for `GET /api/users`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersResponse {
    #[schema(value_type = Vec<UserSchema>)]
    pub users: Vec<User>,
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserBody,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 413, description = "Body too large", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: JsonBody<CreateUserBody>,
) -> ApiResult<HttpResponse> {
    let user = state
        .registry
        .create_user(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(UserResponse { user }))
}

/// List registered users in registration order.
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users", body = UsersResponse),
        (status = 503, description = "Store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UsersResponse>> {
    let users = state.registry_query.list_users().await?;
    Ok(web::Json(UsersResponse { users }))
}
