//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, Error as ActixError, web};
use mockable::DefaultClock;

use crate::domain::ports::CreateUserRequest;
use crate::domain::{NarrativeComposer, User};
use crate::inbound::http::{configure, json_config, state::HttpState};
use crate::outbound::memory::InMemoryRecordStore;

/// Body ceiling used by handler tests.
pub const TEST_BODY_LIMIT: usize = 16 * 1024;

/// Fresh state over an empty in-memory store with template narratives.
pub fn memory_state() -> HttpState {
    HttpState::from_store(
        Arc::new(InMemoryRecordStore::new()),
        Arc::new(DefaultClock),
        NarrativeComposer::template_only(),
    )
}

/// Application wired exactly as the server wires it, minus middleware.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = ActixError,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(json_config(TEST_BODY_LIMIT))
        .configure(configure)
}

/// Register a user straight through the registry port.
pub async fn register_user(state: &HttpState, email: &str) -> User {
    state
        .registry
        .create_user(CreateUserRequest {
            full_name: Some("Ana Pérez".to_owned()),
            email: Some(email.to_owned()),
            password: None,
        })
        .await
        .expect("user registration succeeds")
}
