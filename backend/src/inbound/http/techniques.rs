//! Explainability technique catalogue.
//!
//! ```text
//! GET /api/techniques
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Technique, techniques};
use crate::inbound::http::schemas::TechniqueSchema;

/// Response body for `GET /api/techniques`.
#[derive(Debug, Serialize, ToSchema)]
pub struct TechniquesResponse {
    #[schema(value_type = Vec<TechniqueSchema>)]
    pub techniques: &'static [Technique],
}

/// List the catalogue in its fixed order.
#[utoipa::path(
    get,
    path = "/api/techniques",
    responses((status = 200, description = "Technique catalogue", body = TechniquesResponse)),
    tags = ["catalogue"],
    operation_id = "listTechniques"
)]
#[get("/techniques")]
pub async fn list_techniques() -> web::Json<TechniquesResponse> {
    web::Json(TechniquesResponse {
        techniques: techniques(),
    })
}
