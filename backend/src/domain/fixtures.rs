//! Shared fixtures for domain unit tests: the credit-scoring scenario used
//! throughout the report pipeline tests.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::domain::{
    Case, CaseId, Flow, InputFactor, Model, ModelId, ReportId, ReportOptions, User, UserId,
};

pub(crate) const USER_ID: &str = "11111111-1111-4111-8111-111111111111";
pub(crate) const MODEL_ID: &str = "22222222-2222-4222-8222-222222222222";
pub(crate) const CASE_ID: &str = "33333333-3333-4333-8333-333333333333";
pub(crate) const REPORT_ID: &str = "44444444-4444-4444-8444-444444444444";

pub(crate) fn case_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 19, 10, 0, 0)
        .single()
        .expect("valid case timestamp")
}

pub(crate) fn report_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 20, 9, 30, 0)
        .single()
        .expect("valid report timestamp")
}

pub(crate) fn user() -> User {
    User::new(
        UserId::new(USER_ID).expect("fixture user id"),
        "Ana Pérez",
        "ana@example.com",
        case_timestamp(),
    )
}

pub(crate) fn model() -> Model {
    Model {
        id: ModelId::new(MODEL_ID).expect("fixture model id"),
        user_id: UserId::new(USER_ID).expect("fixture user id"),
        name: "credit-model".to_owned(),
        objective: "Evaluar crédito".to_owned(),
        model_type: Some("xgboost".to_owned()),
        inputs: vec!["ingresos".to_owned(), "deuda".to_owned()],
        flow: Flow::Upload,
        techniques: vec!["shap".to_owned()],
        created_at: case_timestamp(),
    }
}

pub(crate) fn case() -> Case {
    Case {
        id: CaseId::new(CASE_ID).expect("fixture case id"),
        user_id: UserId::new(USER_ID).expect("fixture user id"),
        model_id: Some(ModelId::new(MODEL_ID).expect("fixture model id")),
        person_name: "Luis Martín".to_owned(),
        person_identifier: Some("123A".to_owned()),
        decision: "Denegado".to_owned(),
        input_values: vec![
            InputFactor::new("ingresos", "1100"),
            InputFactor::new("deuda", "950"),
        ],
        created_at: case_timestamp(),
    }
}

pub(crate) fn upload_options() -> ReportOptions {
    ReportOptions {
        flow: Flow::Upload,
        ..ReportOptions::default()
    }
}

pub(crate) fn report_id() -> ReportId {
    ReportId::new(REPORT_ID).expect("fixture report id")
}

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

pub(crate) fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: report_timestamp(),
    })
}
