pub mod dto;
pub mod password;
pub mod services;
pub mod user;

pub use dto::{OAuthProfile, PublicUser};
pub use password::{Argon2Hasher, CredentialHasher};
pub use services::{
    default_credential, is_using_default_credential, provision_oauth_user, required_fields,
    validate_user,
};
pub use user::User;
