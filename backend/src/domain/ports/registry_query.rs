//! Driving port for reading registered users, models and cases.

use async_trait::async_trait;

use crate::domain::{Case, CaseId, Error, Model, User, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistryQuery: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    async fn list_models(&self, owner: Option<UserId>) -> Result<Vec<Model>, Error>;

    async fn list_cases(&self, owner: Option<UserId>) -> Result<Vec<Case>, Error>;

    async fn fetch_case(&self, id: &CaseId) -> Result<Case, Error>;
}
