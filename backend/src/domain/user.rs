//! User data model.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{CredentialHash, UserId};

/// Registered user owning models, cases and reports.
///
/// ## Invariants
/// - `full_name` and `email` are non-empty once trimmed.
/// - Immutable after registration.
/// - The credential hash is never serialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    full_name: String,
    email: String,
    #[serde(skip)]
    credential: Option<CredentialHash>,
    created_at: DateTime<Utc>,
}

impl User {
    /// Assemble a user from already validated parts.
    pub fn new(
        id: UserId,
        full_name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            email: email.into(),
            credential: None,
            created_at,
        }
    }

    /// Attach a hashed credential.
    #[must_use]
    pub fn with_credential(mut self, credential: CredentialHash) -> Self {
        self.credential = Some(credential);
        self
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn credential(&self) -> Option<&CredentialHash> {
        self.credential.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn serialises_without_credential() {
        let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("user id");
        let created_at = Utc
            .with_ymd_and_hms(2026, 2, 19, 10, 0, 0)
            .single()
            .expect("timestamp");
        let user = User::new(id, "Ana Pérez", "ana@example.com", created_at)
            .with_credential(CredentialHash::derive("s3cret").expect("hash"));

        let value = serde_json::to_value(&user).expect("serialise user");
        assert_eq!(
            value,
            json!({
                "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                "fullName": "Ana Pérez",
                "email": "ana@example.com",
                "createdAt": "2026-02-19T10:00:00Z",
            })
        );
        assert!(user.credential().is_some());
    }
}
