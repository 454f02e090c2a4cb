//! Report synthesis: resolve a user, an optional model, a case and request
//! options into a [`StructuredReport`].
//!
//! Synthesis never fails. Every absent optional input degrades to a sentinel
//! so the resulting document is always complete. The only non-deterministic
//! inputs are the report id and creation timestamp, both supplied by
//! [`ReportSynthesizer`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;

use crate::domain::validation::non_blank;
use crate::domain::{
    Case, Compliance, Explainability, Flow, Model, ModelContext, OwnerUser, ReportId,
    ReportMetadata, ReportOptions, ReportSubject, StructuredReport, User,
};

/// Technique list used when neither the request nor the model declares one.
pub const DECLARATIVE_TECHNIQUE: &str = "Documentación declarativa";
pub const REGULATION_SCOPE: &str = "EU AI Act - decisiones de alto impacto";
pub const OBJECTIVE_NOT_INFORMED: &str = "No informado";
pub const MODEL_NOT_SPECIFIED: &str = "Modelo no especificado";
pub const DEFAULT_HIGHLIGHTS: &str =
    "Se priorizaron las variables más influyentes para justificar la decisión individual de este caso.";
pub const DEFAULT_HUMAN_OVERSIGHT: &str =
    "Revisión humana obligatoria para casos frontera, denegaciones y reclamaciones.";
pub const DEFAULT_APPEAL_PROCESS: &str =
    "La persona afectada puede solicitar revisión manual y aportar nueva documentación.";
pub const UPLOAD_LIMITATION: &str =
    "Las explicaciones dependen de la calidad de los datos y de la representatividad del entrenamiento.";
pub const QUESTIONNAIRE_LIMITATION: &str =
    "Modo cuestionario: la explicación es declarativa y no sustituye auditoría técnica del modelo.";
pub const TRACEABILITY_LIMITATION: &str =
    "Mantener trazabilidad de versiones del modelo y registro de decisiones por caso/persona.";

/// Inputs resolved by the caller before synthesis.
///
/// The caller guarantees `case` belongs to `user`.
#[derive(Debug, Clone, Copy)]
pub struct SynthesisInput<'a> {
    pub user: &'a User,
    pub model: Option<&'a Model>,
    pub case: &'a Case,
    pub options: &'a ReportOptions,
}

/// Assemble a report with an explicit id and timestamp.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use xai_report::domain::{
///     Case, CaseId, ReportId, ReportOptions, SynthesisInput, User, UserId, synthesize,
/// };
///
/// let now = Utc::now();
/// let user = User::new(UserId::random(), "Ana Pérez", "ana@example.com", now);
/// let case = Case {
///     id: CaseId::random(),
///     user_id: user.id().clone(),
///     model_id: None,
///     person_name: "Luis Martín".into(),
///     person_identifier: None,
///     decision: "Denegado".into(),
///     input_values: Vec::new(),
///     created_at: now,
/// };
/// let options = ReportOptions::default();
/// let input = SynthesisInput { user: &user, model: None, case: &case, options: &options };
/// let report = synthesize(input, ReportId::random(), now);
/// assert_eq!(report.explainability.techniques, ["Documentación declarativa"]);
/// ```
pub fn synthesize(
    input: SynthesisInput<'_>,
    report_id: ReportId,
    created_at: DateTime<Utc>,
) -> StructuredReport {
    let SynthesisInput {
        user,
        model,
        case,
        options,
    } = input;
    let flow = options.flow;

    StructuredReport {
        metadata: ReportMetadata {
            report_id,
            created_at,
            regulation_scope: REGULATION_SCOPE.to_owned(),
            flow,
        },
        subject: ReportSubject {
            person_name: case.person_name.clone(),
            person_identifier: non_blank(case.person_identifier.clone()),
            owner_user: OwnerUser {
                id: user.id().clone(),
                full_name: user.full_name().to_owned(),
                email: user.email().to_owned(),
            },
        },
        model_context: ModelContext {
            model_id: model.map(|m| m.id.clone()),
            model_name: resolve_model_name(model, options),
            model_type: model.and_then(|m| non_blank(m.model_type.clone())),
            objective: resolve_objective(model, options),
            decision: case.decision.clone(),
            timestamp: case.created_at,
        },
        explainability: Explainability {
            techniques: resolve_techniques(model, options),
            per_person_inputs: case
                .input_values
                .iter()
                .map(|factor| factor.justification())
                .collect(),
            highlights: non_blank(options.highlights.clone())
                .unwrap_or_else(|| DEFAULT_HIGHLIGHTS.to_owned()),
        },
        compliance: Compliance {
            human_oversight: non_blank(options.human_oversight.clone())
                .unwrap_or_else(|| DEFAULT_HUMAN_OVERSIGHT.to_owned()),
            appeal_process: non_blank(options.appeal_process.clone())
                .unwrap_or_else(|| DEFAULT_APPEAL_PROCESS.to_owned()),
        },
        limitations: limitations_for(flow),
    }
}

fn resolve_techniques(model: Option<&Model>, options: &ReportOptions) -> Vec<String> {
    let requested: Vec<String> = options
        .techniques
        .iter()
        .filter(|technique| !technique.trim().is_empty())
        .cloned()
        .collect();
    if !requested.is_empty() {
        return requested;
    }

    let declared: Vec<String> = model
        .map(|m| {
            m.techniques
                .iter()
                .filter(|technique| !technique.trim().is_empty())
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    if !declared.is_empty() {
        return declared;
    }

    vec![DECLARATIVE_TECHNIQUE.to_owned()]
}

fn resolve_objective(model: Option<&Model>, options: &ReportOptions) -> String {
    non_blank(options.objective.clone())
        .or_else(|| model.and_then(|m| non_blank(Some(m.objective.clone()))))
        .unwrap_or_else(|| OBJECTIVE_NOT_INFORMED.to_owned())
}

fn resolve_model_name(model: Option<&Model>, options: &ReportOptions) -> String {
    model
        .and_then(|m| non_blank(Some(m.name.clone())))
        .or_else(|| non_blank(options.model_name.clone()))
        .unwrap_or_else(|| MODEL_NOT_SPECIFIED.to_owned())
}

fn limitations_for(flow: Flow) -> Vec<String> {
    let caveat = match flow {
        Flow::Upload => UPLOAD_LIMITATION,
        Flow::Questionnaire => QUESTIONNAIRE_LIMITATION,
    };
    vec![caveat.to_owned(), TRACEABILITY_LIMITATION.to_owned()]
}

/// Synthesizer stamping each report with a fresh id and the clock's time.
#[derive(Clone)]
pub struct ReportSynthesizer {
    clock: Arc<dyn Clock>,
}

impl ReportSynthesizer {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn synthesize(&self, input: SynthesisInput<'_>) -> StructuredReport {
        synthesize(input, ReportId::random(), self.clock.utc())
    }
}

#[cfg(test)]
#[path = "report_synthesis_tests.rs"]
mod tests;
