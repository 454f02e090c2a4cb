//! Driving port for registering users, models and cases.
//!
//! Request fields arrive as raw optional strings; the use-case validates
//! required fields and identifiers so every adapter reports the same
//! failures.

use async_trait::async_trait;

use crate::domain::{Case, Error, InputFactor, Model, User};

/// Registration request for a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUserRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// Optional secret, stored only as a salted hash.
    pub password: Option<String>,
}

/// Registration request for a model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateModelRequest {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub objective: Option<String>,
    pub model_type: Option<String>,
    pub inputs: Vec<String>,
    pub flow: Option<String>,
    pub techniques: Vec<String>,
}

/// Registration request for a decision case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateCaseRequest {
    pub user_id: Option<String>,
    pub model_id: Option<String>,
    pub person_name: Option<String>,
    pub person_identifier: Option<String>,
    pub decision: Option<String>,
    pub input_values: Vec<InputFactor>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryCommand: Send + Sync {
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error>;

    /// Fails with `not_found` when the owning user does not exist.
    async fn create_model(&self, request: CreateModelRequest) -> Result<Model, Error>;

    /// Fails with `not_found` when the owning user does not exist. The model
    /// reference is stored without being resolved.
    async fn create_case(&self, request: CreateCaseRequest) -> Result<Case, Error>;
}
