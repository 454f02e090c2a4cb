//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    RecordStore, RegistryCommand, RegistryQuery, ReportCommand, ReportQuery,
};
use crate::domain::{NarrativeComposer, RegistryService, ReportService};
use mockable::Clock;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registry: Arc<dyn RegistryCommand>,
    pub registry_query: Arc<dyn RegistryQuery>,
    pub reports: Arc<dyn ReportCommand>,
    pub reports_query: Arc<dyn ReportQuery>,
}

impl HttpState {
    /// Build state backed by the domain services over one record store.
    pub fn from_store<S>(
        store: Arc<S>,
        clock: Arc<dyn Clock>,
        composer: NarrativeComposer,
    ) -> Self
    where
        S: RecordStore + 'static,
    {
        let registry = Arc::new(RegistryService::new(Arc::clone(&store), Arc::clone(&clock)));
        let reports = Arc::new(ReportService::new(store, clock, composer));
        Self {
            registry: registry.clone(),
            registry_query: registry,
            reports: reports.clone(),
            reports_query: reports,
        }
    }
}
