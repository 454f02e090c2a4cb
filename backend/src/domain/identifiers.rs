//! UUID-backed identifiers for users, models, cases and reports.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned when parsing an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierValidationError {
    #[error("{kind} must not be empty")]
    Empty { kind: &'static str },
    #[error("{kind} must be a valid UUID")]
    Invalid { kind: &'static str },
}

macro_rules! define_identifier {
    ($(#[$meta:meta])* $name:ident => $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the identifier from borrowed input.
            pub fn new(id: impl AsRef<str>) -> Result<Self, IdentifierValidationError> {
                Self::from_owned(id.as_ref().to_owned())
            }

            /// Generate a new random identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            fn from_owned(id: String) -> Result<Self, IdentifierValidationError> {
                if id.is_empty() {
                    return Err(IdentifierValidationError::Empty { kind: $kind });
                }
                if id.trim() != id {
                    return Err(IdentifierValidationError::Invalid { kind: $kind });
                }
                Uuid::parse_str(&id)
                    .map_err(|_| IdentifierValidationError::Invalid { kind: $kind })?;
                Ok(Self(id))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_ref())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentifierValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::from_owned(value)
            }
        }
    };
}

define_identifier!(
    /// Stable user identifier.
    UserId => "user id"
);
define_identifier!(
    /// Stable model identifier.
    ModelId => "model id"
);
define_identifier!(
    /// Stable case identifier.
    CaseId => "case id"
);
define_identifier!(
    /// Globally unique report identifier; never reused.
    ReportId => "report id"
);
