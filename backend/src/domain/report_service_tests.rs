//! Tests for the report service.

use std::sync::Arc;
use std::sync::Mutex;

use rstest::rstest;

use super::*;
use crate::domain::fixtures;
use crate::domain::ports::{MockNarrativeGenerator, MockRecordStore, NarrativeGeneratorError};
use crate::domain::{ErrorCode, Flow, ReportOptions};

fn service(store: MockRecordStore) -> ReportService<MockRecordStore> {
    ReportService::new(
        Arc::new(store),
        fixtures::fixture_clock(),
        NarrativeComposer::template_only(),
    )
}

fn request(options: ReportOptions) -> GenerateReportRequest {
    GenerateReportRequest {
        user_id: Some(fixtures::USER_ID.to_owned()),
        case_id: Some(fixtures::CASE_ID.to_owned()),
        options,
    }
}

/// Store resolving the fixture records and capturing appended reports.
fn resolving_store(
    model: Option<crate::domain::Model>,
    appended: Arc<Mutex<Vec<ReportRecord>>>,
) -> MockRecordStore {
    let mut store = MockRecordStore::new();
    store
        .expect_find_user()
        .returning(|_| Ok(Some(fixtures::user())));
    store
        .expect_find_owned_case()
        .returning(|_, _| Ok(Some(fixtures::case())));
    store
        .expect_find_model()
        .returning(move |_| Ok(model.clone()));
    store.expect_append_report().returning(move |record| {
        appended
            .lock()
            .expect("appended records lock")
            .push(record);
        Ok(())
    });
    store
}

#[tokio::test]
async fn generates_and_persists_credit_scenario() {
    let appended = Arc::new(Mutex::new(Vec::new()));
    let store = resolving_store(Some(fixtures::model()), Arc::clone(&appended));

    let generated = service(store)
        .generate_report(request(fixtures::upload_options()))
        .await
        .expect("report generated");

    let report = &generated.report;
    assert_eq!(report.model_context.model_name, "credit-model");
    assert_eq!(report.explainability.techniques, ["shap"]);
    assert_eq!(
        report.explainability.per_person_inputs,
        ["ingresos: 1100", "deuda: 950"]
    );
    assert_eq!(report.metadata.flow, Flow::Upload);
    assert_eq!(report.metadata.created_at, fixtures::report_timestamp());
    assert!(generated.document.contains("Luis Martín"));
    assert!(generated.document.contains("Reporte justificativo XAI"));
    assert!(generated.narrative.contains("Denegado"));

    let records = appended.lock().expect("appended records lock");
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.id(), report.id());
    assert_eq!(record.case_id().as_ref(), fixtures::CASE_ID);
    assert_eq!(record.document(), generated.document);
    assert_eq!(record.narrative(), generated.narrative);
}

#[tokio::test]
async fn dangling_model_reference_yields_declarative_report() {
    let appended = Arc::new(Mutex::new(Vec::new()));
    let store = resolving_store(None, Arc::clone(&appended));

    let generated = service(store)
        .generate_report(request(ReportOptions::default()))
        .await
        .expect("report generated");

    assert!(generated.report.is_declarative());
    assert_eq!(
        generated.report.model_context.model_name,
        "Modelo no especificado"
    );
    assert_eq!(appended.lock().expect("lock").len(), 1);
}

#[rstest]
#[case(None, Some(fixtures::CASE_ID), "missing required fields: userId")]
#[case(Some(fixtures::USER_ID), Some(" "), "missing required fields: caseId")]
#[case(None, None, "missing required fields: userId, caseId")]
#[tokio::test]
async fn missing_ids_are_validation_errors(
    #[case] user_id: Option<&str>,
    #[case] case_id: Option<&str>,
    #[case] message: &str,
) {
    let mut store = MockRecordStore::new();
    store.expect_find_user().times(0);
    store.expect_append_report().times(0);

    let error = service(store)
        .generate_report(GenerateReportRequest {
            user_id: user_id.map(str::to_owned),
            case_id: case_id.map(str::to_owned),
            options: ReportOptions::default(),
        })
        .await
        .expect_err("validation fails");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), message);
}

#[tokio::test]
async fn case_owned_by_another_user_is_not_found() {
    let mut store = MockRecordStore::new();
    store
        .expect_find_user()
        .returning(|_| Ok(Some(fixtures::user())));
    store
        .expect_find_owned_case()
        .times(1)
        .return_once(|_, _| Ok(None));
    store.expect_append_report().times(0);

    let error = service(store)
        .generate_report(request(ReportOptions::default()))
        .await
        .expect_err("not found");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "user or case not found");
}

#[tokio::test]
async fn failing_external_narrative_still_completes() {
    let appended = Arc::new(Mutex::new(Vec::new()));
    let store = resolving_store(Some(fixtures::model()), Arc::clone(&appended));

    let mut generator = MockNarrativeGenerator::new();
    generator.expect_source().return_const("mock");
    generator
        .expect_generate()
        .times(1)
        .return_once(|_| Err(NarrativeGeneratorError::status(503_u16, "overloaded")));
    let composer = NarrativeComposer::with_external(
        Arc::new(generator),
        std::time::Duration::from_secs(5),
    );
    let service = ReportService::new(Arc::new(store), fixtures::fixture_clock(), composer);

    let generated = service
        .generate_report(request(fixtures::upload_options()))
        .await
        .expect("report generated despite narrative failure");

    assert!(generated.narrative.contains("Luis Martín"));
    assert!(generated.narrative.contains("Denegado"));
}

#[tokio::test]
async fn fetch_document_returns_stored_body() {
    let user = fixtures::user();
    let model = fixtures::model();
    let case = fixtures::case();
    let options = fixtures::upload_options();
    let report = crate::domain::synthesize(
        SynthesisInput {
            user: &user,
            model: Some(&model),
            case: &case,
            options: &options,
        },
        fixtures::report_id(),
        fixtures::report_timestamp(),
    );
    let record = ReportRecord::new(case.id.clone(), report, "texto", "<html></html>");

    let mut store = MockRecordStore::new();
    store
        .expect_find_report()
        .times(1)
        .return_once(move |_| Ok(Some(record)));

    let document = service(store)
        .fetch_document(&fixtures::report_id())
        .await
        .expect("document found");

    assert_eq!(document.body, "<html></html>");
    assert_eq!(document.content_type, "application/msword");
    assert_eq!(
        document.filename,
        format!("reporte-xai-{}.doc", fixtures::REPORT_ID)
    );
}

#[tokio::test]
async fn fetch_document_reports_unknown_id_without_side_effects() {
    let mut store = MockRecordStore::new();
    store.expect_find_report().times(1).return_once(|_| Ok(None));
    store.expect_append_report().times(0);

    let error = service(store)
        .fetch_document(&ReportId::random())
        .await
        .expect_err("unknown report");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn append_failure_surfaces_as_service_unavailable() {
    let mut store = MockRecordStore::new();
    store
        .expect_find_user()
        .returning(|_| Ok(Some(fixtures::user())));
    store
        .expect_find_owned_case()
        .returning(|_, _| Ok(Some(fixtures::case())));
    store
        .expect_find_model()
        .returning(|_| Ok(Some(fixtures::model())));
    store.expect_append_report().times(1).return_once(|_| {
        Err(crate::domain::ports::RecordStoreError::connection(
            "store offline",
        ))
    });

    let error = service(store)
        .generate_report(request(ReportOptions::default()))
        .await
        .expect_err("append fails");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}
