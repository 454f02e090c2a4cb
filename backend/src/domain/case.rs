//! Individual decision cases.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{CaseId, ModelId, UserId};

/// One named input factor recorded for a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputFactor {
    pub name: String,
    pub value: String,
}

impl InputFactor {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Render the factor as `"<name>: <value>"`.
    pub fn justification(&self) -> String {
        format!("{}: {}", self.name, self.value)
    }
}

/// A single decision outcome for a person.
///
/// `model_id` is recorded as supplied and may dangle; report generation
/// resolves it leniently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: CaseId,
    pub user_id: UserId,
    pub model_id: Option<ModelId>,
    pub person_name: String,
    pub person_identifier: Option<String>,
    pub decision: String,
    pub input_values: Vec<InputFactor>,
    pub created_at: DateTime<Utc>,
}
