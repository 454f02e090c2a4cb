//! Render a structured report and its narrative as a downloadable
//! word-processor document.
//!
//! The output is a self-contained HTML body served as `application/msword`,
//! which word processors open directly. Rendering is deterministic: the same
//! report and narrative always yield byte-identical output.

use chrono::SecondsFormat;

use crate::domain::{ReportId, StructuredReport};

/// Media type under which rendered documents are served.
pub const DOCUMENT_CONTENT_TYPE: &str = "application/msword";

/// Title heading every rendered document.
pub const DOCUMENT_TITLE: &str = "Reporte justificativo XAI";

/// Placeholder for an absent person identifier.
pub const IDENTIFIER_NOT_AVAILABLE: &str = "N/D";

/// Download filename for a report document.
///
/// # Examples
/// ```
/// use xai_report::domain::{ReportId, document_filename};
///
/// let id = ReportId::new("44444444-4444-4444-8444-444444444444").expect("valid id");
/// assert_eq!(
///     document_filename(&id),
///     "reporte-xai-44444444-4444-4444-8444-444444444444.doc"
/// );
/// ```
pub fn document_filename(id: &ReportId) -> String {
    format!("reporte-xai-{id}.doc")
}

/// Trim `raw` and escape the characters significant to markup.
///
/// Every caller-supplied string passes through here before being embedded.
pub fn escape_markup(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut escaped = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Produce the document body for `report` with `narrative` embedded.
pub fn render_document(report: &StructuredReport, narrative: &str) -> String {
    let mut lines: Vec<String> = vec![
        "<!DOCTYPE html>".to_owned(),
        "<html lang=\"es\">".to_owned(),
        "<head>".to_owned(),
        "<meta charset=\"utf-8\" />".to_owned(),
        format!("<title>{DOCUMENT_TITLE}</title>"),
        "</head>".to_owned(),
        "<body>".to_owned(),
    ];

    push_header(&mut lines, report);
    push_subject(&mut lines, report);
    push_model_context(&mut lines, report);
    push_explainability(&mut lines, report);
    push_narrative(&mut lines, narrative);
    push_compliance(&mut lines, report);

    lines.push("</body>".to_owned());
    lines.push("</html>".to_owned());
    lines.join("\n")
}

fn push_header(lines: &mut Vec<String>, report: &StructuredReport) {
    let metadata = &report.metadata;
    lines.push(format!("<h1>{DOCUMENT_TITLE}</h1>"));
    lines.push(format!(
        "<p><strong>ID:</strong> {id} | <strong>Fecha:</strong> {date} | \
         <strong>Ámbito:</strong> {scope}</p>",
        id = escape_markup(metadata.report_id.as_ref()),
        date = metadata
            .created_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        scope = escape_markup(&metadata.regulation_scope),
    ));
}

fn push_subject(lines: &mut Vec<String>, report: &StructuredReport) {
    let subject = &report.subject;
    let identifier = subject
        .person_identifier
        .as_deref()
        .map(escape_markup)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| IDENTIFIER_NOT_AVAILABLE.to_owned());

    lines.push("<h2>1. Persona afectada</h2>".to_owned());
    lines.push(labelled("Nombre", &escape_markup(&subject.person_name)));
    lines.push(labelled("Identificador", &identifier));
    lines.push(labelled(
        "Responsable",
        &format!(
            "{} ({})",
            escape_markup(&subject.owner_user.full_name),
            escape_markup(&subject.owner_user.email),
        ),
    ));
}

fn push_model_context(lines: &mut Vec<String>, report: &StructuredReport) {
    let context = &report.model_context;
    lines.push("<h2>2. Contexto del modelo</h2>".to_owned());
    lines.push(labelled("Modelo", &escape_markup(&context.model_name)));
    if let Some(model_type) = context
        .model_type
        .as_deref()
        .filter(|value| !value.trim().is_empty())
    {
        lines.push(labelled("Tipo", &escape_markup(model_type)));
    }
    lines.push(labelled("Objetivo", &escape_markup(&context.objective)));
    lines.push(labelled("Decisión", &escape_markup(&context.decision)));
}

fn push_explainability(lines: &mut Vec<String>, report: &StructuredReport) {
    let explainability = &report.explainability;
    lines.push("<h2>3. Explicabilidad</h2>".to_owned());
    lines.push("<p><strong>Técnicas aplicadas:</strong></p>".to_owned());
    push_list(lines, &explainability.techniques);
    lines.push("<p><strong>Factores de entrada del caso:</strong></p>".to_owned());
    push_list(lines, &explainability.per_person_inputs);
    lines.push(format!("<p>{}</p>", escape_markup(&explainability.highlights)));
}

/// Blank lines separate paragraphs; single newlines become line breaks.
fn push_narrative(lines: &mut Vec<String>, narrative: &str) {
    lines.push("<h2>4. Narrativa</h2>".to_owned());
    for paragraph in narrative
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
    {
        let body = paragraph
            .lines()
            .map(escape_markup)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("<br />");
        lines.push(format!("<p>{body}</p>"));
    }
}

fn push_compliance(lines: &mut Vec<String>, report: &StructuredReport) {
    let compliance = &report.compliance;
    lines.push("<h2>5. Cumplimiento y limitaciones</h2>".to_owned());
    lines.push(labelled(
        "Supervisión humana",
        &escape_markup(&compliance.human_oversight),
    ));
    lines.push(labelled(
        "Proceso de reclamación",
        &escape_markup(&compliance.appeal_process),
    ));
    lines.push("<p><strong>Limitaciones:</strong></p>".to_owned());
    push_list(lines, &report.limitations);
}

fn labelled(label: &str, escaped_value: &str) -> String {
    format!("<p><strong>{label}:</strong> {escaped_value}</p>")
}

fn push_list(lines: &mut Vec<String>, items: &[String]) {
    lines.push("<ul>".to_owned());
    lines.extend(
        items
            .iter()
            .map(|item| format!("<li>{}</li>", escape_markup(item))),
    );
    lines.push("</ul>".to_owned());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures;
    use crate::domain::{SynthesisInput, synthesize};
    use rstest::{fixture, rstest};

    #[fixture]
    fn report() -> StructuredReport {
        let user = fixtures::user();
        let model = fixtures::model();
        let case = fixtures::case();
        let options = fixtures::upload_options();
        synthesize(
            SynthesisInput {
                user: &user,
                model: Some(&model),
                case: &case,
                options: &options,
            },
            fixtures::report_id(),
            fixtures::report_timestamp(),
        )
    }

    #[rstest]
    #[case("<script>alert(1)</script>", "&lt;script&gt;alert(1)&lt;/script&gt;")]
    #[case("  Tom & Jerry  ", "Tom &amp; Jerry")]
    #[case("\"citado\"", "&quot;citado&quot;")]
    #[case("   ", "")]
    fn escapes_and_trims(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape_markup(raw), expected);
    }

    #[rstest]
    fn renders_every_section_in_order(report: StructuredReport) {
        let document = render_document(&report, "Primer párrafo.\n\nSegundo párrafo.");

        let headings = [
            DOCUMENT_TITLE,
            "1. Persona afectada",
            "2. Contexto del modelo",
            "3. Explicabilidad",
            "4. Narrativa",
            "5. Cumplimiento y limitaciones",
        ];
        let positions: Vec<usize> = headings
            .iter()
            .map(|heading| document.find(heading).expect("heading present"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

        assert!(document.contains(fixtures::REPORT_ID));
        assert!(document.contains("2026-02-20T09:30:00.000Z"));
        assert!(document.contains("EU AI Act - decisiones de alto impacto"));
        assert!(document.contains("Luis Martín"));
        assert!(document.contains("123A"));
        assert!(document.contains("Ana Pérez (ana@example.com)"));
        assert!(document.contains("<strong>Tipo:</strong> xgboost"));
        assert!(document.contains("<li>shap</li>"));
        assert!(document.contains("<li>ingresos: 1100</li>"));
        assert!(document.contains("<p>Primer párrafo.</p>"));
        assert!(document.contains("<p>Segundo párrafo.</p>"));
    }

    #[rstest]
    fn missing_identifier_renders_placeholder(mut report: StructuredReport) {
        report.subject.person_identifier = None;
        let document = render_document(&report, "texto");
        assert!(document.contains("<strong>Identificador:</strong> N/D"));
    }

    #[rstest]
    fn absent_model_type_is_omitted(mut report: StructuredReport) {
        report.model_context.model_type = None;
        let document = render_document(&report, "texto");
        assert!(!document.contains("<strong>Tipo:</strong>"));
    }

    #[rstest]
    fn user_supplied_markup_is_escaped(mut report: StructuredReport) {
        report.subject.person_name = "<script>alert(1)</script>".to_owned();
        let document = render_document(&report, "<b>negrita</b>");

        assert!(!document.contains("<script>"));
        assert!(!document.contains("<b>"));
        assert!(document.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(document.contains("&lt;b&gt;negrita&lt;/b&gt;"));
    }

    #[rstest]
    fn single_newlines_become_line_breaks(report: StructuredReport) {
        let document = render_document(&report, "línea uno\nlínea dos");
        assert!(document.contains("<p>línea uno<br />línea dos</p>"));
    }

    #[rstest]
    fn rendering_is_deterministic(report: StructuredReport) {
        assert_eq!(
            render_document(&report, "texto"),
            render_document(&report, "texto")
        );
    }

    #[rstest]
    fn filename_embeds_report_id() {
        assert_eq!(
            document_filename(&fixtures::report_id()),
            format!("reporte-xai-{}.doc", fixtures::REPORT_ID)
        );
    }
}
