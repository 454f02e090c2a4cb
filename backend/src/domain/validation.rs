//! Required-field checks shared by the registry and report use-cases.

use serde_json::json;

use crate::domain::{Error, IdentifierValidationError};

/// One or more required fields were missing or blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required fields: {}", .fields.join(", "))]
pub struct MissingFieldsError {
    fields: Vec<&'static str>,
}

impl MissingFieldsError {
    /// Names of the missing fields, in request order.
    pub fn fields(&self) -> &[&'static str] {
        &self.fields
    }
}

impl From<MissingFieldsError> for Error {
    fn from(value: MissingFieldsError) -> Self {
        Error::invalid_request(value.to_string()).with_details(json!({
            "fields": value.fields,
            "code": "missing_field",
        }))
    }
}

/// Collects missing fields while extracting trimmed values.
///
/// Every missing field is reported at once so callers can fix a request in a
/// single round trip.
#[derive(Debug, Default)]
pub(crate) struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Return the trimmed value, recording `field` when absent or blank.
    pub(crate) fn take(&mut self, field: &'static str, value: Option<String>) -> String {
        match non_blank(value) {
            Some(text) => text,
            None => {
                self.missing.push(field);
                String::new()
            }
        }
    }

    pub(crate) fn finish(self) -> Result<(), MissingFieldsError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(MissingFieldsError {
                fields: self.missing,
            })
        }
    }
}

/// Trim the value and discard it when nothing remains.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty())
}

/// Map a malformed identifier to an `invalid_request` error naming the field.
pub(crate) fn invalid_identifier(field: &'static str, err: IdentifierValidationError) -> Error {
    Error::invalid_request(format!("{field}: {err}")).with_details(json!({
        "field": field,
        "code": "invalid_id",
    }))
}
