use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::accounts::{
    password::{is_password_hash, CredentialHasher},
    services,
};
use crate::error::CredentialError;

/// Account record: identity fields plus the stored credential.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default, deserialize_with = "deserialize_password_hash")]
    password: Option<String>, // one-way hash, never exposed in JSON
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub email_verified_at: Option<OffsetDateTime>,
    #[serde(skip_serializing, default)]
    remember_token: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    /// New record without a credential.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password: None,
            email_verified_at: None,
            remember_token: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// Attach a hash that was already produced elsewhere (e.g. loaded from storage).
    ///
    /// Anything `hasher` does not recognize as one of its hashes is rejected.
    pub fn with_password_hash<H>(
        mut self,
        hash: impl Into<String>,
        hasher: &H,
    ) -> Result<Self, CredentialError>
    where
        H: CredentialHasher + ?Sized,
    {
        let hash = hash.into();
        if !hasher.is_hash(&hash) {
            return Err(CredentialError::NotAHash);
        }
        self.password = Some(hash);
        Ok(self)
    }

    pub fn password_hash(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn has_password(&self) -> bool {
        self.password.as_deref().is_some_and(|h| !h.is_empty())
    }

    /// Hash `plain` and store the result. On error the record is unchanged.
    pub fn set_password<H>(&mut self, plain: &str, hasher: &H) -> Result<(), CredentialError>
    where
        H: CredentialHasher + ?Sized,
    {
        let hash = hasher.hash(plain)?;
        self.password = Some(hash);
        Ok(())
    }

    pub fn clear_password(&mut self) {
        self.password = None;
    }

    pub fn remember_token(&self) -> Option<&str> {
        self.remember_token.as_deref()
    }

    pub fn set_remember_token(&mut self, token: Option<String>) {
        self.remember_token = token;
    }

    pub fn mark_email_verified(&mut self) {
        self.email_verified_at = Some(OffsetDateTime::now_utc());
    }

    pub fn has_verified_email(&self) -> bool {
        self.email_verified_at.is_some()
    }

    pub fn required_fields() -> BTreeSet<&'static str> {
        services::required_fields()
    }

    pub fn is_using_default_credential<H>(&self, hasher: &H) -> bool
    where
        H: CredentialHasher + ?Sized,
    {
        services::is_using_default_credential(self, hasher)
    }
}

/// Empty means no credential; anything else must already be a PHC hash.
fn deserialize_password_hash<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(None),
        Some(v) if is_password_hash(&v) => Ok(Some(v)),
        Some(_) => Err(serde::de::Error::custom(CredentialError::NotAHash)),
    }
}
