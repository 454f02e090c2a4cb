//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use xai_report::Trace;
#[cfg(debug_assertions)]
use xai_report::doc::ApiDoc;
use xai_report::inbound::http::health::HealthState;
use xai_report::inbound::http::state::HttpState;
use xai_report::inbound::http::{configure, json_config};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    max_body_bytes: usize,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        max_body_bytes,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config(max_body_bytes))
        .wrap(Trace)
        .configure(configure);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// Demo data is seeded before the listener binds, so readiness is only
/// reported once the store holds it.
///
/// # Errors
/// Propagates [`std::io::Error`] when seeding, building the narrative client,
/// binding the socket or starting the server fails.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    mut config: ServerConfig,
) -> std::io::Result<Server> {
    let narrative_enabled = config.narrative_enabled();
    let http_state = web::Data::new(build_http_state(&mut config).await?);
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        max_body_bytes,
        ..
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            max_body_bytes,
        })
    })
    .bind(&bind_addr)?
    .run();

    info!(
        host = %bind_addr.0,
        port = bind_addr.1,
        max_body_bytes,
        narrative_enabled,
        "server listening"
    );
    health_state.mark_ready();
    Ok(server)
}
