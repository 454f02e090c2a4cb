//! Salted credential hashes for optional user secrets.
//!
//! Secrets are stored only as Argon2id PHC strings and never serialised.

use argon2::Argon2;
use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

/// Errors raised while deriving a credential hash.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("credential secret must not be empty")]
    EmptySecret,
    #[error("credential hashing failed: {message}")]
    Hashing { message: String },
}

/// Argon2id hash of a user-supplied secret.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialHash(String);

impl CredentialHash {
    /// Hash `secret` with a fresh random salt.
    pub fn derive(secret: &str) -> Result<Self, CredentialError> {
        if secret.is_empty() {
            return Err(CredentialError::EmptySecret);
        }
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| Self(hash.to_string()))
            .map_err(|err| CredentialError::Hashing {
                message: err.to_string(),
            })
    }

    /// Check `secret` against the stored hash.
    #[cfg(test)]
    pub(crate) fn verify(&self, secret: &str) -> bool {
        use argon2::password_hash::{PasswordHash, PasswordVerifier};

        let Ok(parsed) = PasswordHash::new(&self.0) else {
            return false;
        };
        Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok()
    }
}

impl std::fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CredentialHash(<redacted>)")
    }
}
