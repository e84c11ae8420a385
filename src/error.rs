use thiserror::Error;

/// Failures of the one-way password primitive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("stored password hash is malformed: {0}")]
    MalformedHash(String),
    #[error("refusing to store a value that is not a password hash")]
    NotAHash,
}

/// Record-level validation failures reported to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required fields are empty: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("invalid email: {0}")]
    InvalidEmail(String),
}
