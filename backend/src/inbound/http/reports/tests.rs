//! Tests for the report handlers.

use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::ports::{
    CreateCaseRequest, CreateModelRequest, MockRegistryCommand, MockRegistryQuery,
    MockReportCommand, MockReportQuery,
};
use crate::domain::{Error, InputFactor};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{memory_state, register_user, test_app};

struct Scenario {
    state: HttpState,
    user_id: String,
    case_id: String,
}

async fn credit_scenario() -> Scenario {
    let state = memory_state();
    let user = register_user(&state, "ana@example.com").await;
    let model = state
        .registry
        .create_model(CreateModelRequest {
            user_id: Some(user.id().to_string()),
            name: Some("credit-model".to_owned()),
            objective: Some("Evaluar crédito".to_owned()),
            model_type: Some("xgboost".to_owned()),
            techniques: vec!["shap".to_owned()],
            ..CreateModelRequest::default()
        })
        .await
        .expect("model registration succeeds");
    let case = state
        .registry
        .create_case(CreateCaseRequest {
            user_id: Some(user.id().to_string()),
            model_id: Some(model.id.to_string()),
            person_name: Some("Luis Martín".to_owned()),
            person_identifier: Some("123A".to_owned()),
            decision: Some("Denegado".to_owned()),
            input_values: vec![
                InputFactor::new("ingresos", "1100"),
                InputFactor::new("deuda", "950"),
            ],
        })
        .await
        .expect("case registration succeeds");

    Scenario {
        state,
        user_id: user.id().to_string(),
        case_id: case.id.to_string(),
    }
}

#[actix_web::test]
async fn generates_and_serves_the_report_document() {
    let scenario = credit_scenario().await;
    let app = actix_test::init_service(test_app(scenario.state)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/report")
        .set_json(json!({
            "userId": scenario.user_id,
            "caseId": scenario.case_id,
            "flow": "upload"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;

    assert_eq!(
        body.pointer("/report/modelContext/modelName")
            .and_then(Value::as_str),
        Some("credit-model")
    );
    assert_eq!(
        body.pointer("/report/explainability/techniques"),
        Some(&json!(["shap"]))
    );
    assert_eq!(
        body.pointer("/report/explainability/perPersonInputs"),
        Some(&json!(["ingresos: 1100", "deuda: 950"]))
    );
    let markup = body
        .get("documentMarkup")
        .and_then(Value::as_str)
        .expect("document markup");
    assert!(markup.contains("Luis Martín"));
    assert!(body.get("narrative").and_then(Value::as_str).is_some());
    let report_id = body
        .get("reportId")
        .and_then(Value::as_str)
        .expect("report id")
        .to_owned();

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/reports/{report_id}/document"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let header_text = |name: header::HeaderName| {
        response
            .headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    assert_eq!(
        header_text(header::CONTENT_TYPE).as_deref(),
        Some("application/msword")
    );
    assert_eq!(
        header_text(header::CONTENT_DISPOSITION),
        Some(format!("attachment; filename=\"reporte-xai-{report_id}.doc\""))
    );
    let document = actix_test::read_body(response).await;
    let document = String::from_utf8(document.to_vec()).expect("utf-8 document");
    assert_eq!(document, markup);
    assert!(document.contains("Reporte justificativo XAI"));
}

#[actix_web::test]
async fn listings_omit_document_bodies() {
    let scenario = credit_scenario().await;
    let user_id = scenario.user_id.clone();
    let app = actix_test::init_service(test_app(scenario.state)).await;

    for _ in 0..2 {
        let request = actix_test::TestRequest::post()
            .uri("/api/report")
            .set_json(json!({"userId": scenario.user_id, "caseId": scenario.case_id}))
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, request).await.status(),
            StatusCode::OK
        );
    }

    let request = actix_test::TestRequest::get()
        .uri(&format!("/api/reports?userId={user_id}"))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, request).await;
    let reports = body
        .get("reports")
        .and_then(Value::as_array)
        .expect("reports array");
    assert_eq!(reports.len(), 2);
    for report in reports {
        assert!(report.get("document").is_none());
        assert!(report.get("narrative").and_then(Value::as_str).is_some());
        assert_eq!(
            report.get("caseId").and_then(Value::as_str),
            Some(scenario.case_id.as_str())
        );
    }
}

#[rstest]
#[case::keeps_named_entries(json!([null, "lime", ""]), json!(["lime"]))]
#[case::falls_back_to_model(json!([null, " "]), json!(["shap"]))]
#[actix_web::test]
async fn requested_techniques_skip_empty_entries(
    #[case] techniques: Value,
    #[case] expected: Value,
) {
    let scenario = credit_scenario().await;
    let app = actix_test::init_service(test_app(scenario.state)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/report")
        .set_json(json!({
            "userId": scenario.user_id,
            "caseId": scenario.case_id,
            "techniques": techniques
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.pointer("/report/explainability/techniques"),
        Some(&expected)
    );
}

#[rstest]
#[case::missing_case(
    json!({"userId": "11111111-1111-4111-8111-111111111111"}),
    StatusCode::BAD_REQUEST
)]
#[case::malformed_user(
    json!({"userId": "usr-1", "caseId": "33333333-3333-4333-8333-333333333333"}),
    StatusCode::BAD_REQUEST
)]
#[case::unknown_pair(
    json!({
        "userId": "11111111-1111-4111-8111-111111111111",
        "caseId": "33333333-3333-4333-8333-333333333333"
    }),
    StatusCode::NOT_FOUND
)]
#[actix_web::test]
async fn generation_rejects_unresolvable_requests(
    #[case] body: Value,
    #[case] expected: StatusCode,
) {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let request = actix_test::TestRequest::post()
        .uri("/api/report")
        .set_json(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), expected);
}

#[rstest]
#[case::unknown(
    "/api/reports/44444444-4444-4444-8444-444444444444/document",
    StatusCode::NOT_FOUND
)]
#[case::malformed("/api/reports/rpt-1/document", StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn document_rejects_unresolvable_ids(#[case] uri: &str, #[case] expected: StatusCode) {
    let app = actix_test::init_service(test_app(memory_state())).await;
    let request = actix_test::TestRequest::get().uri(uri).to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), expected);
}

#[actix_web::test]
async fn unavailable_store_surfaces_as_503() {
    let mut reports = MockReportCommand::new();
    reports
        .expect_generate_report()
        .times(1)
        .return_once(|_| Err(Error::service_unavailable("record store unavailable")));
    let state = HttpState {
        registry: Arc::new(MockRegistryCommand::new()),
        registry_query: Arc::new(MockRegistryQuery::new()),
        reports: Arc::new(reports),
        reports_query: Arc::new(MockReportQuery::new()),
    };
    let app = actix_test::init_service(test_app(state)).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/report")
        .set_json(json!({
            "userId": "11111111-1111-4111-8111-111111111111",
            "caseId": "33333333-3333-4333-8333-333333333333"
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
