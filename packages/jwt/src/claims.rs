//! Builder for JWT payloads with registered claims.

use chrono::{DateTime, Duration, Utc};
use serde_json::{Map, Value};

use crate::types::Payload;

/// Builds a [`Payload`] from registered and custom claims.
///
/// Times are written as integer NumericDates.
#[derive(Debug, Clone, Default)]
pub struct ClaimsBuilder {
    claims: Map<String, Value>,
}

impl ClaimsBuilder {
    /// Create a new claims builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the subject (sub) claim.
    pub fn subject(self, sub: impl Into<String>) -> Self {
        self.claim("sub", Value::String(sub.into()))
    }

    /// Set the issuer (iss) claim.
    pub fn issuer(self, iss: impl Into<String>) -> Self {
        self.claim("iss", Value::String(iss.into()))
    }

    /// Set a single audience (aud) claim.
    pub fn audience(self, aud: impl Into<String>) -> Self {
        self.claim("aud", Value::String(aud.into()))
    }

    /// Set the audience (aud) claim to a list.
    pub fn audiences<I, S>(self, auds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let auds = auds.into_iter().map(|aud| Value::String(aud.into())).collect();
        self.claim("aud", Value::Array(auds))
    }

    /// Set the expiration time relative to now.
    pub fn expires_in(self, dur: Duration) -> Self {
        self.expires_at(Utc::now() + dur)
    }

    /// Set the expiration (exp) claim.
    pub fn expires_at(self, exp: DateTime<Utc>) -> Self {
        self.claim("exp", Value::from(exp.timestamp()))
    }

    /// Set the issued-at time to now.
    pub fn issued_now(self) -> Self {
        self.issued_at(Utc::now())
    }

    /// Set the issued-at (iat) claim.
    pub fn issued_at(self, iat: DateTime<Utc>) -> Self {
        self.claim("iat", Value::from(iat.timestamp()))
    }

    /// Set the not-before (nbf) claim.
    pub fn not_before(self, nbf: DateTime<Utc>) -> Self {
        self.claim("nbf", Value::from(nbf.timestamp()))
    }

    /// Set the JWT ID (jti) claim.
    pub fn jwt_id(self, jti: impl Into<String>) -> Self {
        self.claim("jti", Value::String(jti.into()))
    }

    /// Add a custom claim, replacing any earlier value under the same name.
    pub fn claim(mut self, k: impl Into<String>, v: Value) -> Self {
        self.claims.insert(k.into(), v);
        self
    }

    /// Build the payload.
    pub fn build(self) -> Payload {
        self.claims
    }
}
