//! HTTP inbound adapter exposing REST endpoints.

pub mod cases;
pub mod error;
pub mod health;
pub mod models;
pub mod reports;
pub mod schemas;
pub mod state;
pub mod techniques;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

use actix_web::web;

pub use error::{ApiResult, json_error_handler};

/// JSON extractor configuration with the request body ceiling applied.
///
/// Oversized or malformed bodies are reported through the domain error
/// envelope rather than Actix's plain-text defaults.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .content_type_required(false)
        .error_handler(json_error_handler)
}

/// Register every route on an application or scope.
///
/// Health probes read `web::Data<health::HealthState>`; everything under
/// `/api` reads `web::Data<state::HttpState>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health::ready).service(health::live).service(
        web::scope("/api")
            .service(health::health)
            .service(techniques::list_techniques)
            .service(users::list_users)
            .service(users::create_user)
            .service(models::list_models)
            .service(models::create_model)
            .service(cases::list_cases)
            .service(cases::create_case)
            .service(cases::get_case)
            .service(reports::generate_report)
            .service(reports::list_reports)
            .service(reports::get_report_document),
    );
}
