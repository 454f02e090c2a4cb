//! Driven port for the Record Store holding users, models, cases and
//! reports.
//!
//! The core only needs lookups plus append operations; there is no update or
//! delete. Implementations must tolerate concurrent appends.

use async_trait::async_trait;

use crate::domain::{
    Case, CaseId, Model, ModelId, ReportId, ReportRecord, ReportSummary, User, UserId,
};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by record store adapters.
    pub enum RecordStoreError {
        /// The backing store could not be reached.
        Connection { message: String } => "record store connection failed: {message}",
        /// A query or append failed during execution.
        Query { message: String } => "record store query failed: {message}",
        /// An append reused an identifier already present in the store.
        DuplicateId { id: String } => "record store already holds id {id}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn insert_user(&self, user: User) -> Result<(), RecordStoreError>;

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, RecordStoreError>;

    /// All users in registration order.
    async fn list_users(&self) -> Result<Vec<User>, RecordStoreError>;

    async fn insert_model(&self, model: Model) -> Result<(), RecordStoreError>;

    async fn find_model(&self, id: &ModelId) -> Result<Option<Model>, RecordStoreError>;

    /// Models in creation order, restricted to `owner` when given.
    async fn list_models(&self, owner: Option<UserId>) -> Result<Vec<Model>, RecordStoreError>;

    async fn insert_case(&self, case: Case) -> Result<(), RecordStoreError>;

    /// Fetch a case only if it belongs to `owner`.
    async fn find_owned_case(
        &self,
        id: &CaseId,
        owner: &UserId,
    ) -> Result<Option<Case>, RecordStoreError>;

    async fn find_case(&self, id: &CaseId) -> Result<Option<Case>, RecordStoreError>;

    /// Cases in creation order, restricted to `owner` when given.
    async fn list_cases(&self, owner: Option<UserId>) -> Result<Vec<Case>, RecordStoreError>;

    /// Append a report record; ids are never reused.
    async fn append_report(&self, record: ReportRecord) -> Result<(), RecordStoreError>;

    async fn find_report(&self, id: &ReportId) -> Result<Option<ReportRecord>, RecordStoreError>;

    /// Report summaries in append order, restricted to `owner` when given.
    async fn list_reports(
        &self,
        owner: Option<UserId>,
    ) -> Result<Vec<ReportSummary>, RecordStoreError>;
}
