use std::collections::BTreeSet;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::accounts::{dto::OAuthProfile, password::CredentialHasher, user::User};
use crate::error::{CredentialError, ValidationError};

/// Placeholder password given to accounts created through an external
/// identity provider until the owner picks a real one.
const DEFAULT_OAUTH_PASSWORD: &str = "google123";

const NAME_FIELD: &str = "name";
const EMAIL_FIELD: &str = "email";
const REQUIRED_FIELDS: [&str; 2] = [NAME_FIELD, EMAIL_FIELD];

pub fn default_credential() -> &'static str {
    DEFAULT_OAUTH_PASSWORD
}

pub fn required_fields() -> BTreeSet<&'static str> {
    REQUIRED_FIELDS.into_iter().collect()
}

/// True iff the record stores a hash that verifies against [`default_credential`].
///
/// Advisory only: a hash the primitive cannot handle counts as `false`.
pub fn is_using_default_credential<H>(user: &User, hasher: &H) -> bool
where
    H: CredentialHasher + ?Sized,
{
    let Some(hash) = user.password_hash().filter(|h| !h.is_empty()) else {
        return false;
    };
    match hasher.verify(default_credential(), hash) {
        Ok(matches) => matches,
        Err(e) => {
            warn!(user_id = %user.id, error = %e, "default credential check failed");
            false
        }
    }
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub fn validate_user(user: &User) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    if user.name.trim().is_empty() {
        missing.push(NAME_FIELD);
    }
    if user.email.trim().is_empty() {
        missing.push(EMAIL_FIELD);
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }
    if !is_valid_email(user.email.trim()) {
        return Err(ValidationError::InvalidEmail(user.email.clone()));
    }
    Ok(())
}

/// Build the record for an account signing up through an identity provider.
///
/// The account gets the default credential so the caller can later prompt
/// the owner to choose a real password.
pub fn provision_oauth_user<H>(profile: &OAuthProfile, hasher: &H) -> Result<User, CredentialError>
where
    H: CredentialHasher + ?Sized,
{
    let email = profile.email.trim().to_lowercase();
    let mut user = User::new(profile.name.trim(), email);
    user.set_password(default_credential(), hasher)?;
    if profile.email_verified {
        user.mark_email_verified();
    }
    info!(user_id = %user.id, email = %user.email, "oauth user provisioned");
    debug!(user_id = %user.id, verified = profile.email_verified, "provisioned with default credential");
    Ok(user)
}
