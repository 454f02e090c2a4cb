//! Process-local record store.
//!
//! Records live in insertion-ordered vectors behind a single
//! `tokio::sync::RwLock`: reads proceed in parallel, appends serialise.
//! Contents are lost when the process exits.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{RecordStore, RecordStoreError};
use crate::domain::{
    Case, CaseId, Model, ModelId, ReportId, ReportRecord, ReportSummary, User, UserId,
};

#[derive(Debug, Default)]
struct Records {
    users: Vec<User>,
    models: Vec<Model>,
    cases: Vec<Case>,
    reports: Vec<ReportRecord>,
}

/// Append-only in-memory implementation of [`RecordStore`].
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: RwLock<Records>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn ensure_unique<T, I>(items: &[T], id: &I, key: impl Fn(&T) -> &I) -> Result<(), RecordStoreError>
where
    I: PartialEq + std::fmt::Display,
{
    if items.iter().any(|item| key(item) == id) {
        return Err(RecordStoreError::duplicate_id(id.to_string()));
    }
    Ok(())
}

fn owned_by<T: Clone>(items: &[T], owner: Option<&UserId>, key: impl Fn(&T) -> &UserId) -> Vec<T> {
    items
        .iter()
        .filter(|item| owner.is_none_or(|owner| key(item) == owner))
        .cloned()
        .collect()
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert_user(&self, user: User) -> Result<(), RecordStoreError> {
        let mut records = self.records.write().await;
        ensure_unique(&records.users, user.id(), User::id)?;
        records.users.push(user);
        Ok(())
    }

    async fn find_user(&self, id: &UserId) -> Result<Option<User>, RecordStoreError> {
        let records = self.records.read().await;
        Ok(records.users.iter().find(|user| user.id() == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, RecordStoreError> {
        Ok(self.records.read().await.users.clone())
    }

    async fn insert_model(&self, model: Model) -> Result<(), RecordStoreError> {
        let mut records = self.records.write().await;
        ensure_unique(&records.models, &model.id, |item| &item.id)?;
        records.models.push(model);
        Ok(())
    }

    async fn find_model(&self, id: &ModelId) -> Result<Option<Model>, RecordStoreError> {
        let records = self.records.read().await;
        Ok(records.models.iter().find(|model| &model.id == id).cloned())
    }

    async fn list_models(&self, owner: Option<UserId>) -> Result<Vec<Model>, RecordStoreError> {
        let records = self.records.read().await;
        Ok(owned_by(&records.models, owner.as_ref(), |model| &model.user_id))
    }

    async fn insert_case(&self, case: Case) -> Result<(), RecordStoreError> {
        let mut records = self.records.write().await;
        ensure_unique(&records.cases, &case.id, |item| &item.id)?;
        records.cases.push(case);
        Ok(())
    }

    async fn find_owned_case(
        &self,
        id: &CaseId,
        owner: &UserId,
    ) -> Result<Option<Case>, RecordStoreError> {
        let records = self.records.read().await;
        Ok(records
            .cases
            .iter()
            .find(|case| &case.id == id && &case.user_id == owner)
            .cloned())
    }

    async fn find_case(&self, id: &CaseId) -> Result<Option<Case>, RecordStoreError> {
        let records = self.records.read().await;
        Ok(records.cases.iter().find(|case| &case.id == id).cloned())
    }

    async fn list_cases(&self, owner: Option<UserId>) -> Result<Vec<Case>, RecordStoreError> {
        let records = self.records.read().await;
        Ok(owned_by(&records.cases, owner.as_ref(), |case| &case.user_id))
    }

    async fn append_report(&self, record: ReportRecord) -> Result<(), RecordStoreError> {
        let mut records = self.records.write().await;
        ensure_unique(&records.reports, record.id(), ReportRecord::id)?;
        records.reports.push(record);
        Ok(())
    }

    async fn find_report(&self, id: &ReportId) -> Result<Option<ReportRecord>, RecordStoreError> {
        let records = self.records.read().await;
        Ok(records
            .reports
            .iter()
            .find(|record| record.id() == id)
            .cloned())
    }

    async fn list_reports(
        &self,
        owner: Option<UserId>,
    ) -> Result<Vec<ReportSummary>, RecordStoreError> {
        let records = self.records.read().await;
        Ok(records
            .reports
            .iter()
            .filter(|record| owner.as_ref().is_none_or(|owner| record.user_id() == owner))
            .map(ReportRecord::summary)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::{ReportOptions, SynthesisInput, synthesize};

    fn user(name: &str) -> User {
        let created_at = Utc
            .with_ymd_and_hms(2026, 2, 19, 10, 0, 0)
            .single()
            .expect("timestamp");
        User::new(UserId::random(), name, format!("{name}@example.com"), created_at)
    }

    fn case_for(owner: &User) -> Case {
        Case {
            id: CaseId::random(),
            user_id: owner.id().clone(),
            model_id: None,
            person_name: "Luis Martín".to_owned(),
            person_identifier: None,
            decision: "Denegado".to_owned(),
            input_values: Vec::new(),
            created_at: owner.created_at(),
        }
    }

    fn record_for(owner: &User, case: &Case) -> ReportRecord {
        let options = ReportOptions::default();
        let report = synthesize(
            SynthesisInput {
                user: owner,
                model: None,
                case,
                options: &options,
            },
            ReportId::random(),
            owner.created_at(),
        );
        ReportRecord::new(case.id.clone(), report, "narrativa", "<html></html>")
    }

    #[fixture]
    fn store() -> InMemoryRecordStore {
        InMemoryRecordStore::new()
    }

    #[rstest]
    #[tokio::test]
    async fn lists_preserve_insertion_order(store: InMemoryRecordStore) {
        let first = user("ana");
        let second = user("marta");
        store.insert_user(first.clone()).await.expect("insert");
        store.insert_user(second.clone()).await.expect("insert");

        let users = store.list_users().await.expect("list");
        assert_eq!(users, [first, second]);
    }

    #[rstest]
    #[tokio::test]
    async fn rejects_duplicate_ids(store: InMemoryRecordStore) {
        let ana = user("ana");
        store.insert_user(ana.clone()).await.expect("insert");

        let error = store.insert_user(ana.clone()).await.expect_err("duplicate");
        assert_eq!(error, RecordStoreError::duplicate_id(ana.id().to_string()));
    }

    #[rstest]
    #[tokio::test]
    async fn owned_case_lookup_checks_owner(store: InMemoryRecordStore) {
        let ana = user("ana");
        let marta = user("marta");
        let case = case_for(&ana);
        store.insert_case(case.clone()).await.expect("insert");

        let owned = store
            .find_owned_case(&case.id, ana.id())
            .await
            .expect("lookup");
        let foreign = store
            .find_owned_case(&case.id, marta.id())
            .await
            .expect("lookup");

        assert_eq!(owned, Some(case.clone()));
        assert_eq!(foreign, None);
        assert_eq!(store.find_case(&case.id).await.expect("lookup"), Some(case));
    }

    #[rstest]
    #[tokio::test]
    async fn list_cases_filters_by_owner(store: InMemoryRecordStore) {
        let ana = user("ana");
        let marta = user("marta");
        let ana_case = case_for(&ana);
        store.insert_case(ana_case.clone()).await.expect("insert");
        store.insert_case(case_for(&marta)).await.expect("insert");

        let filtered = store
            .list_cases(Some(ana.id().clone()))
            .await
            .expect("list");
        assert_eq!(filtered, [ana_case]);
        assert_eq!(store.list_cases(None).await.expect("list").len(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn reports_are_listed_as_summaries(store: InMemoryRecordStore) {
        let ana = user("ana");
        let marta = user("marta");
        let ana_record = record_for(&ana, &case_for(&ana));
        let marta_record = record_for(&marta, &case_for(&marta));
        store.append_report(ana_record.clone()).await.expect("append");
        store.append_report(marta_record).await.expect("append");

        let summaries = store
            .list_reports(Some(ana.id().clone()))
            .await
            .expect("list");
        assert_eq!(summaries, [ana_record.summary()]);

        let found = store.find_report(ana_record.id()).await.expect("lookup");
        assert_eq!(
            found.map(|record| record.document().to_owned()),
            Some("<html></html>".to_owned())
        );
        let missing = store
            .find_report(&ReportId::random())
            .await
            .expect("lookup");
        assert!(missing.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_are_all_retained() {
        let store = Arc::new(InMemoryRecordStore::new());
        let ana = user("ana");
        let case = case_for(&ana);

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let store = Arc::clone(&store);
                let record = record_for(&ana, &case);
                tokio::spawn(async move { store.append_report(record).await })
            })
            .collect();
        for handle in handles {
            handle.await.expect("task joins").expect("append succeeds");
        }

        assert_eq!(store.list_reports(None).await.expect("list").len(), 32);
    }
}
