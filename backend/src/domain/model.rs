//! Registered AI models and their evaluation flow.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ModelId, UserId};

/// Evaluation mode of a model or report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    /// Artifact-backed evaluation.
    Upload,
    /// Declarative evaluation with no backing artifact.
    Questionnaire,
}

impl Flow {
    /// Normalise a report request flow: only the literal `upload` selects
    /// [`Flow::Upload`].
    ///
    /// # Examples
    /// ```
    /// use xai_report::domain::Flow;
    ///
    /// assert_eq!(Flow::for_report(Some("upload")), Flow::Upload);
    /// assert_eq!(Flow::for_report(Some("UPLOAD")), Flow::Questionnaire);
    /// assert_eq!(Flow::for_report(None), Flow::Questionnaire);
    /// ```
    pub fn for_report(raw: Option<&str>) -> Self {
        match raw {
            Some("upload") => Self::Upload,
            _ => Self::Questionnaire,
        }
    }

    /// Normalise a model registration flow: only the literal `questionnaire`
    /// selects [`Flow::Questionnaire`].
    pub fn for_model(raw: Option<&str>) -> Self {
        match raw {
            Some("questionnaire") => Self::Questionnaire,
            _ => Self::Upload,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Questionnaire => "questionnaire",
        }
    }
}

impl std::fmt::Display for Flow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A model registered by its owner.
///
/// Technique ids reference the catalogue but are not validated against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub id: ModelId,
    pub user_id: UserId,
    pub name: String,
    pub objective: String,
    pub model_type: Option<String>,
    pub inputs: Vec<String>,
    pub flow: Flow,
    pub techniques: Vec<String>,
    pub created_at: DateTime<Utc>,
}
