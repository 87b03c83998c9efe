//! Short-lived Admin API token signing
//!
//! Ghost Admin API keys have the form `<key id>:<hex secret>`. Each request
//! carries a fresh HS256 JWT whose header names the key id and whose claims
//! hold only the issue time, a five minute expiry, and the API audience.

use chrono::{DateTime, Duration, Utc};
use ghostpress_domain::constants::{AUTH_SCHEME, CREDENTIAL_SEPARATOR, TOKEN_TTL_SECS};
use ghostpress_domain::{Credential, ExposeSecret};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::errors::AuthError;

/// Claims carried by an Admin API token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Issue time, seconds since the epoch
    pub iat: i64,
    /// Expiry, `iat` plus the token lifetime
    pub exp: i64,
    /// Admin API audience, e.g. `/v4/admin/`
    pub aud: String,
}

/// Signed, time-bound token. Built per request and dropped after it.
#[derive(Debug)]
pub struct SignedToken {
    token: SecretString,
    key_id: String,
    audience: String,
    issued_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl SignedToken {
    /// Key id named in the token header.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Audience claim.
    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// Issue time.
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Expiry time.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Value for the `Authorization` header, e.g. `Ghost eyJ...`.
    pub fn authorization_header(&self) -> String {
        format!("{AUTH_SCHEME} {}", self.token.expose_secret())
    }
}

/// Builds Admin API tokens from a [`Credential`].
#[derive(Debug, Clone, Copy)]
pub struct TokenSigner {
    ttl: Duration,
}

impl Default for TokenSigner {
    fn default() -> Self {
        Self { ttl: Duration::seconds(TOKEN_TTL_SECS) }
    }
}

impl TokenSigner {
    /// Signer with the Admin API's five minute lifetime.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign a token valid from now until now + 5 minutes.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidKeyFormat`] when the credential is not a
    /// single `<id>:<secret>` pair and [`AuthError::InvalidSecretEncoding`]
    /// when the secret is not hex.
    pub fn sign(&self, credential: &Credential, audience: &str) -> Result<SignedToken, AuthError> {
        self.sign_at(credential, audience, Utc::now())
    }

    /// Sign a token as if issued at `issued_at`.
    ///
    /// # Errors
    ///
    /// Same as [`TokenSigner::sign`].
    pub fn sign_at(
        &self,
        credential: &Credential,
        audience: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<SignedToken, AuthError> {
        let (key_id, secret) = split_credential(credential)?;
        let expires_at = issued_at + self.ttl;

        let claims = AdminClaims {
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
            aud: audience.to_string(),
        };
        let header = Header { kid: Some(key_id.to_string()), ..Header::new(Algorithm::HS256) };

        let token = jsonwebtoken::encode(&header, &claims, &EncodingKey::from_secret(&secret))
            .map_err(|e| AuthError::Signing(e.to_string()))?;

        Ok(SignedToken {
            token: SecretString::from(token),
            key_id: key_id.to_string(),
            audience: audience.to_string(),
            issued_at,
            expires_at,
        })
    }
}

/// Split `<id>:<hex secret>` and decode the secret.
///
/// # Errors
///
/// See [`TokenSigner::sign`].
pub fn split_credential(
    credential: &Credential,
) -> Result<(&str, Zeroizing<Vec<u8>>), AuthError> {
    let raw = credential.expose_secret().trim();
    let (key_id, secret_hex) =
        raw.split_once(CREDENTIAL_SEPARATOR).ok_or(AuthError::InvalidKeyFormat)?;

    if key_id.is_empty() || secret_hex.is_empty() || secret_hex.contains(CREDENTIAL_SEPARATOR) {
        return Err(AuthError::InvalidKeyFormat);
    }

    let secret = hex::decode(secret_hex)
        .map(Zeroizing::new)
        .map_err(|e| AuthError::InvalidSecretEncoding(e.to_string()))?;

    Ok((key_id, secret))
}
