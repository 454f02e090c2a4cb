//! Registry services for users, models and decision cases.
//!
//! The service validates raw requests, stamps records with the injected
//! clock and appends them to the record store. References from models and
//! cases to their owning user are checked; a case's model reference is
//! stored as supplied.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{
    CreateCaseRequest, CreateModelRequest, CreateUserRequest, RecordStore, RecordStoreError,
    RegistryCommand, RegistryQuery,
};
use crate::domain::validation::{RequiredFields, invalid_identifier, non_blank};
use crate::domain::{
    Case, CaseId, CredentialHash, Error, Flow, InputFactor, Model, ModelId, User, UserId,
};

pub(crate) fn map_store_error(error: RecordStoreError) -> Error {
    match error {
        RecordStoreError::Connection { message } => {
            Error::service_unavailable(format!("record store unavailable: {message}"))
        }
        RecordStoreError::Query { message } => {
            Error::internal(format!("record store error: {message}"))
        }
        RecordStoreError::DuplicateId { id } => {
            Error::internal(format!("record store rejected duplicate id {id}"))
        }
    }
}

/// Registry service implementing the registry driving ports.
#[derive(Clone)]
pub struct RegistryService<S> {
    store: Arc<S>,
    clock: Arc<dyn Clock>,
}

impl<S> RegistryService<S> {
    /// Create a registry service over `store`, timestamping with `clock`.
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }
}

impl<S> RegistryService<S>
where
    S: RecordStore,
{
    /// Resolve a raw owner id to an existing user id.
    async fn existing_owner(&self, raw: String) -> Result<UserId, Error> {
        let user_id = UserId::new(&raw).map_err(|err| invalid_identifier("userId", err))?;
        self.store
            .find_user(&user_id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(format!("user {user_id} not found")))?;
        Ok(user_id)
    }

    /// Seed the demonstration user and model used by the bundled front end.
    pub async fn seed_demo_data(&self) -> Result<(User, Model), Error> {
        let user = self
            .create_user(CreateUserRequest {
                full_name: Some("Marta Gómez".to_owned()),
                email: Some("marta.riesgos@empresa.eu".to_owned()),
                password: None,
            })
            .await?;
        let model = self
            .create_model(CreateModelRequest {
                user_id: Some(user.id().to_string()),
                name: Some("credit-risk-v4".to_owned()),
                objective: Some("Evaluar solicitudes de crédito al consumo".to_owned()),
                model_type: None,
                inputs: ["edad", "ingresos", "deuda_actual", "historial_pagos"]
                    .map(str::to_owned)
                    .to_vec(),
                flow: Some(Flow::Upload.as_str().to_owned()),
                techniques: vec!["shap".to_owned(), "counterfactual".to_owned()],
            })
            .await?;
        info!(user_id = %user.id(), model_id = %model.id, "seeded demo records");
        Ok((user, model))
    }
}

async fn hash_secret(secret: String) -> Result<CredentialHash, Error> {
    tokio::task::spawn_blocking(move || CredentialHash::derive(&secret))
        .await
        .map_err(|err| Error::internal(format!("credential hashing task failed: {err}")))?
        .map_err(|err| Error::internal(err.to_string()))
}

fn clean_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .filter_map(|value| non_blank(Some(value)))
        .collect()
}

#[async_trait]
impl<S> RegistryCommand for RegistryService<S>
where
    S: RecordStore,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error> {
        let mut required = RequiredFields::new();
        let full_name = required.take("fullName", request.full_name);
        let email = required.take("email", request.email);
        required.finish()?;

        let mut user = User::new(UserId::random(), full_name, email, self.clock.utc());
        if let Some(secret) = request.password.filter(|secret| !secret.is_empty()) {
            user = user.with_credential(hash_secret(secret).await?);
        }

        self.store
            .insert_user(user.clone())
            .await
            .map_err(map_store_error)?;
        Ok(user)
    }

    async fn create_model(&self, request: CreateModelRequest) -> Result<Model, Error> {
        let mut required = RequiredFields::new();
        let raw_user_id = required.take("userId", request.user_id);
        let name = required.take("name", request.name);
        required.finish()?;

        let user_id = self.existing_owner(raw_user_id).await?;
        let model = Model {
            id: ModelId::random(),
            user_id,
            name,
            objective: non_blank(request.objective).unwrap_or_default(),
            model_type: non_blank(request.model_type),
            inputs: clean_list(request.inputs),
            flow: Flow::for_model(request.flow.as_deref()),
            techniques: clean_list(request.techniques),
            created_at: self.clock.utc(),
        };

        self.store
            .insert_model(model.clone())
            .await
            .map_err(map_store_error)?;
        Ok(model)
    }

    async fn create_case(&self, request: CreateCaseRequest) -> Result<Case, Error> {
        let mut required = RequiredFields::new();
        let raw_user_id = required.take("userId", request.user_id);
        let person_name = required.take("personName", request.person_name);
        let decision = required.take("decision", request.decision);
        required.finish()?;

        let model_id = non_blank(request.model_id)
            .map(|raw| ModelId::new(raw).map_err(|err| invalid_identifier("modelId", err)))
            .transpose()?;
        let user_id = self.existing_owner(raw_user_id).await?;

        let case = Case {
            id: CaseId::random(),
            user_id,
            model_id,
            person_name,
            person_identifier: non_blank(request.person_identifier),
            decision,
            input_values: request
                .input_values
                .into_iter()
                .map(|factor| InputFactor::new(factor.name.trim(), factor.value.trim()))
                .collect(),
            created_at: self.clock.utc(),
        };

        self.store
            .insert_case(case.clone())
            .await
            .map_err(map_store_error)?;
        Ok(case)
    }
}

#[async_trait]
impl<S> RegistryQuery for RegistryService<S>
where
    S: RecordStore,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.store.list_users().await.map_err(map_store_error)
    }

    async fn list_models(&self, owner: Option<UserId>) -> Result<Vec<Model>, Error> {
        self.store.list_models(owner).await.map_err(map_store_error)
    }

    async fn list_cases(&self, owner: Option<UserId>) -> Result<Vec<Case>, Error> {
        self.store.list_cases(owner).await.map_err(map_store_error)
    }

    async fn fetch_case(&self, id: &CaseId) -> Result<Case, Error> {
        self.store
            .find_case(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(format!("case {id} not found")))
    }
}

#[cfg(test)]
#[path = "registry_service_tests.rs"]
mod tests;
