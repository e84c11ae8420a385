//! Account records for the web app: identity fields, hashed credentials and
//! detection of OAuth-provisioned accounts still on the default password.

pub mod accounts;
pub mod config;
pub mod error;
pub mod http_client;
pub mod telemetry;

pub use accounts::{
    default_credential, is_using_default_credential, required_fields, Argon2Hasher,
    CredentialHasher, PublicUser, User,
};
pub use error::{CredentialError, ValidationError};
