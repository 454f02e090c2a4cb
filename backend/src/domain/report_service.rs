//! Report generation and retrieval services.
//!
//! Generation runs strictly in sequence: resolve records, synthesize,
//! compose the narrative, render the document, then append the record.
//! Concurrent requests share nothing but the record store.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    GenerateReportRequest, GeneratedReport, RecordStore, ReportCommand, ReportDocument,
    ReportQuery,
};
use crate::domain::registry_service::map_store_error;
use crate::domain::validation::{RequiredFields, invalid_identifier};
use crate::domain::{
    CaseId, DOCUMENT_CONTENT_TYPE, Error, Model, ModelId, NarrativeComposer, ReportId, ReportRecord,
    ReportSummary, ReportSynthesizer, SynthesisInput, UserId, document_filename,
    render_document,
};

/// Report service implementing the report driving ports.
#[derive(Clone)]
pub struct ReportService<S> {
    store: Arc<S>,
    synthesizer: ReportSynthesizer,
    composer: NarrativeComposer,
}

impl<S> ReportService<S> {
    pub fn new(store: Arc<S>, clock: Arc<dyn Clock>, composer: NarrativeComposer) -> Self {
        Self {
            store,
            synthesizer: ReportSynthesizer::new(clock),
            composer,
        }
    }
}

impl<S> ReportService<S>
where
    S: RecordStore,
{
    /// Missing and dangling model references both yield declarative mode.
    async fn resolve_model(&self, model_id: Option<&ModelId>) -> Result<Option<Model>, Error> {
        let Some(model_id) = model_id else {
            return Ok(None);
        };
        let model = self
            .store
            .find_model(model_id)
            .await
            .map_err(map_store_error)?;
        if model.is_none() {
            debug!(%model_id, "case references unknown model; using declarative mode");
        }
        Ok(model)
    }
}

#[async_trait]
impl<S> ReportCommand for ReportService<S>
where
    S: RecordStore,
{
    async fn generate_report(
        &self,
        request: GenerateReportRequest,
    ) -> Result<GeneratedReport, Error> {
        let mut required = RequiredFields::new();
        let raw_user_id = required.take("userId", request.user_id);
        let raw_case_id = required.take("caseId", request.case_id);
        required.finish()?;

        let user_id = UserId::new(&raw_user_id).map_err(|err| invalid_identifier("userId", err))?;
        let case_id = CaseId::new(&raw_case_id).map_err(|err| invalid_identifier("caseId", err))?;

        let user = self
            .store
            .find_user(&user_id)
            .await
            .map_err(map_store_error)?;
        let case = self
            .store
            .find_owned_case(&case_id, &user_id)
            .await
            .map_err(map_store_error)?;
        let (Some(user), Some(case)) = (user, case) else {
            return Err(Error::not_found("user or case not found"));
        };

        let model = self.resolve_model(case.model_id.as_ref()).await?;
        let report = self.synthesizer.synthesize(SynthesisInput {
            user: &user,
            model: model.as_ref(),
            case: &case,
            options: &request.options,
        });
        let narrative = self.composer.compose(&report).await;
        let document = render_document(&report, &narrative.text);

        let record = ReportRecord::new(
            case.id.clone(),
            report.clone(),
            narrative.text.clone(),
            document.clone(),
        );
        self.store
            .append_report(record)
            .await
            .map_err(map_store_error)?;

        info!(
            report_id = %report.id(),
            case_id = %case.id,
            narrative_source = narrative.source,
            declarative = report.is_declarative(),
            "report generated"
        );

        Ok(GeneratedReport {
            report,
            narrative: narrative.text,
            document,
        })
    }
}

#[async_trait]
impl<S> ReportQuery for ReportService<S>
where
    S: RecordStore,
{
    async fn fetch_document(&self, id: &ReportId) -> Result<ReportDocument, Error> {
        let record = self
            .store
            .find_report(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(format!("report {id} not found")))?;

        Ok(ReportDocument {
            report_id: record.id().clone(),
            filename: document_filename(record.id()),
            content_type: DOCUMENT_CONTENT_TYPE,
            body: record.document().to_owned(),
        })
    }

    async fn list_reports(&self, owner: Option<UserId>) -> Result<Vec<ReportSummary>, Error> {
        self.store.list_reports(owner).await.map_err(map_store_error)
    }
}

#[cfg(test)]
#[path = "report_service_tests.rs"]
mod tests;
