//! Structured report aggregate, request options and persisted records.
//!
//! A [`StructuredReport`] is a fully resolved snapshot of a user, an optional
//! model and a case at generation time. It is consumed by the narrative
//! composer and the document renderer and persisted verbatim inside a
//! [`ReportRecord`].

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{CaseId, Flow, ModelId, ReportId, UserId};

/// Request-time overrides recognised by report synthesis.
///
/// Blank strings are treated as absent. `model_name` is only consulted when
/// no model backs the case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    pub flow: Flow,
    pub techniques: Vec<String>,
    pub objective: Option<String>,
    pub highlights: Option<String>,
    pub human_oversight: Option<String>,
    pub appeal_process: Option<String>,
    pub model_name: Option<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            flow: Flow::Questionnaire,
            techniques: Vec::new(),
            objective: None,
            highlights: None,
            human_oversight: None,
            appeal_process: None,
            model_name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub report_id: ReportId,
    pub created_at: DateTime<Utc>,
    pub regulation_scope: String,
    pub flow: Flow,
}

/// Owning user as captured in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerUser {
    pub id: UserId,
    pub full_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSubject {
    pub person_name: String,
    pub person_identifier: Option<String>,
    pub owner_user: OwnerUser,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelContext {
    pub model_id: Option<ModelId>,
    pub model_name: String,
    pub model_type: Option<String>,
    pub objective: String,
    pub decision: String,
    /// Creation time of the case, not of the report.
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Explainability {
    /// Never empty; falls back to the declarative sentinel.
    pub techniques: Vec<String>,
    /// `"<name>: <value>"` per case input, in input order.
    pub per_person_inputs: Vec<String>,
    pub highlights: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Compliance {
    pub human_oversight: String,
    pub appeal_process: String,
}

/// Fully resolved compliance document produced by synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredReport {
    pub metadata: ReportMetadata,
    pub subject: ReportSubject,
    pub model_context: ModelContext,
    pub explainability: Explainability,
    pub compliance: Compliance,
    pub limitations: Vec<String>,
}

impl StructuredReport {
    pub fn id(&self) -> &ReportId {
        &self.metadata.report_id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.subject.owner_user.id
    }

    /// True when neither a model nor an explicit technique selection backed
    /// the report.
    pub fn is_declarative(&self) -> bool {
        self.model_context.model_id.is_none()
            && self.explainability.techniques
                == [crate::domain::report_synthesis::DECLARATIVE_TECHNIQUE]
    }
}

/// Append-only persisted report with its narrative and rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRecord {
    case_id: CaseId,
    report: StructuredReport,
    narrative: String,
    document: String,
}

impl ReportRecord {
    pub fn new(
        case_id: CaseId,
        report: StructuredReport,
        narrative: impl Into<String>,
        document: impl Into<String>,
    ) -> Self {
        Self {
            case_id,
            report,
            narrative: narrative.into(),
            document: document.into(),
        }
    }

    pub fn id(&self) -> &ReportId {
        self.report.id()
    }

    pub fn user_id(&self) -> &UserId {
        self.report.owner_id()
    }

    pub fn case_id(&self) -> &CaseId {
        &self.case_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.report.metadata.created_at
    }

    pub fn report(&self) -> &StructuredReport {
        &self.report
    }

    pub fn narrative(&self) -> &str {
        &self.narrative
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    /// Lightweight listing view without the document body.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            id: self.id().clone(),
            user_id: self.user_id().clone(),
            case_id: self.case_id.clone(),
            created_at: self.created_at(),
            narrative: self.narrative.clone(),
        }
    }
}

/// Listing entry for a persisted report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub id: ReportId,
    pub user_id: UserId,
    pub case_id: CaseId,
    pub created_at: DateTime<Utc>,
    pub narrative: String,
}
