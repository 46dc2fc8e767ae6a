/*
[INPUT]:  Optional API key and secret from client construction
[OUTPUT]: Immutable credential pair for private endpoints
[POS]:    Auth layer - credential model
[UPDATE]: When credential sources or validation rules change
*/

use std::fmt;

use super::HmacSigner;
use crate::http::{HitbtcError, Result};

/// API key and secret for private endpoints.
///
/// Both halves are non-empty. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    api_secret: String,
}

impl Credentials {
    /// Fails with [`HitbtcError::MissingCredentials`] when either half is empty.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();
        if api_key.is_empty() || api_secret.is_empty() {
            return Err(HitbtcError::MissingCredentials);
        }
        Ok(Self {
            api_key,
            api_secret,
        })
    }

    /// Build credentials only when both halves are present and non-empty.
    pub fn from_parts(api_key: Option<&str>, api_secret: Option<&str>) -> Option<Self> {
        match (api_key, api_secret) {
            (Some(key), Some(secret)) => Self::new(key, secret).ok(),
            _ => None,
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn signer(&self) -> HmacSigner {
        HmacSigner::new(self.api_secret.as_bytes())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
