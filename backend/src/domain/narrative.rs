//! Narrative composition for structured reports.
//!
//! [`TemplateNarrativeGenerator`] interpolates the report's own fields and is
//! always available. [`NarrativeComposer`] optionally tries an external
//! generator first, bounded by a deadline, and falls back to the template on
//! any failure so a report request always completes with a narrative.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::StructuredReport;
use crate::domain::ports::{NarrativeGenerator, NarrativeGeneratorError};

/// Paragraph separator understood by the document renderer.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Deterministic narrative built purely from report fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateNarrativeGenerator;

impl TemplateNarrativeGenerator {
    /// Four paragraphs: decision, explainability, oversight, limitations.
    ///
    /// # Examples
    /// ```
    /// # use xai_report::domain::TemplateNarrativeGenerator;
    /// # fn narrate(report: &xai_report::domain::StructuredReport) {
    /// let text = TemplateNarrativeGenerator.compose(report);
    /// assert!(text.contains(&report.subject.person_name));
    /// # }
    /// ```
    pub fn compose(&self, report: &StructuredReport) -> String {
        let subject = &report.subject;
        let context = &report.model_context;
        let explainability = &report.explainability;

        let decision = format!(
            "Este informe justifica la decisión «{decision}» adoptada respecto a {person}, \
             evaluada con el sistema «{model}» cuyo objetivo declarado es: {objective}.",
            decision = context.decision,
            person = subject.person_name,
            model = context.model_name,
            objective = context.objective,
        );

        let factors = if explainability.per_person_inputs.is_empty() {
            "No se registraron factores de entrada para este caso.".to_owned()
        } else {
            format!(
                "Los factores considerados en este caso fueron: {}.",
                explainability.per_person_inputs.join("; ")
            )
        };
        let techniques = format!(
            "Técnicas de explicabilidad declaradas: {}. {factors} {highlights}",
            explainability.techniques.join(", "),
            highlights = explainability.highlights,
        );

        let oversight = format!(
            "Supervisión humana: {} Proceso de reclamación: {}",
            report.compliance.human_oversight, report.compliance.appeal_process,
        );

        let limitations = format!("Limitaciones: {}", report.limitations.join(" "));

        [decision, techniques, oversight, limitations].join(PARAGRAPH_BREAK)
    }
}

#[async_trait]
impl NarrativeGenerator for TemplateNarrativeGenerator {
    fn source(&self) -> &'static str {
        "template"
    }

    async fn generate(&self, report: &StructuredReport) -> Result<String, NarrativeGeneratorError> {
        Ok(self.compose(report))
    }
}

/// Narrative text together with the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedNarrative {
    pub text: String,
    pub source: &'static str,
}

/// Strategy selected at startup: external generator when configured, the
/// template otherwise or whenever the external call fails.
#[derive(Clone)]
pub struct NarrativeComposer {
    external: Option<Arc<dyn NarrativeGenerator>>,
    deadline: Duration,
    template: TemplateNarrativeGenerator,
}

impl NarrativeComposer {
    /// Composer that only uses the template.
    pub fn template_only() -> Self {
        Self {
            external: None,
            deadline: Duration::ZERO,
            template: TemplateNarrativeGenerator,
        }
    }

    /// Composer that tries `external` first, abandoning it after `deadline`.
    pub fn with_external(external: Arc<dyn NarrativeGenerator>, deadline: Duration) -> Self {
        Self {
            external: Some(external),
            deadline,
            template: TemplateNarrativeGenerator,
        }
    }

    pub fn has_external(&self) -> bool {
        self.external.is_some()
    }

    /// Compose the narrative for `report`. Never fails.
    pub async fn compose(&self, report: &StructuredReport) -> ComposedNarrative {
        if let Some(external) = &self.external {
            match self.try_external(external.as_ref(), report).await {
                Ok(text) => {
                    return ComposedNarrative {
                        text,
                        source: external.source(),
                    };
                }
                Err(error) => {
                    warn!(
                        %error,
                        report_id = %report.id(),
                        generator = external.source(),
                        "external narrative failed; using template"
                    );
                }
            }
        }

        ComposedNarrative {
            text: self.template.compose(report),
            source: self.template.source(),
        }
    }

    async fn try_external(
        &self,
        external: &dyn NarrativeGenerator,
        report: &StructuredReport,
    ) -> Result<String, NarrativeGeneratorError> {
        let text = tokio::time::timeout(self.deadline, external.generate(report))
            .await
            .map_err(|_| NarrativeGeneratorError::timeout(self.deadline.as_secs()))??;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(NarrativeGeneratorError::empty());
        }
        Ok(trimmed.to_owned())
    }
}

#[cfg(test)]
#[path = "narrative_tests.rs"]
mod tests;
