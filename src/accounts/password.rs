use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

use crate::error::CredentialError;

/// One-way hash/verify capability the account records rely on.
///
/// Hosts with an existing hash scheme plug it in here; [`Argon2Hasher`] is
/// the default.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, CredentialError>;
    fn verify(&self, plain: &str, hash: &str) -> Result<bool, CredentialError>;

    /// Whether `value` is something this hasher produced rather than plaintext.
    fn is_hash(&self, value: &str) -> bool {
        is_password_hash(value)
    }
}

/// argon2id with the crate's default parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, plain: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| {
                error!(error = %e, "argon2 hash_password error");
                CredentialError::Hash(e.to_string())
            })?
            .to_string();
        Ok(hash)
    }

    fn verify(&self, plain: &str, hash: &str) -> Result<bool, CredentialError> {
        // logged by the caller
        let parsed =
            PasswordHash::new(hash).map_err(|e| CredentialError::MalformedHash(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok())
    }
}

/// True for PHC-formatted strings (`$argon2id$v=19$...`).
pub fn is_password_hash(value: &str) -> bool {
    PasswordHash::new(value).is_ok()
}

pub fn hash_password(plain: &str) -> Result<String, CredentialError> {
    Argon2Hasher.hash(plain)
}

pub fn verify_password(plain: &str, hash: &str) -> Result<bool, CredentialError> {
    Argon2Hasher.verify(plain, hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "Secur3P@ssw0rd!";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(verify_password(password, &hash).expect("verify should succeed"));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let password = "correct-horse-battery-staple";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(!verify_password("wrong-password", &hash).expect("verify should not error"));
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        let err = verify_password("anything", "not-a-valid-hash").unwrap_err();
        assert!(matches!(err, CredentialError::MalformedHash(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn recognizes_hashes_but_not_plaintext() {
        let hash = hash_password("google123").unwrap();
        assert!(is_password_hash(&hash));
        assert!(Argon2Hasher.is_hash(&hash));
        assert!(!is_password_hash("google123"));
        assert!(!is_password_hash("hunter2"));
        assert!(!is_password_hash(""));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with("$argon2id$"));
    }
}
