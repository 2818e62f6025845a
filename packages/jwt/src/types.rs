//! JWT type definitions

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::algorithms::Algorithm;

/// JWT claims set: claim names mapped to JSON values
pub type Payload = Map<String, Value>;

/// JWT header structure
///
/// `alg` must be a string. A non-string `typ` or `kid` from another issuer is kept in
/// `extra` rather than rejecting the token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Header {
    /// Algorithm identifier
    pub alg: String,
    /// Token type, `"JWT"` for tokens this crate produces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
    /// Key identifier hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    /// Any other header parameters, preserved as received
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Header {
    /// Header for a token signed with `algorithm`
    #[must_use]
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            alg: algorithm.as_str().to_string(),
            typ: Some("JWT".to_string()),
            kid: None,
            extra: Map::new(),
        }
    }

    /// Set the key identifier
    #[must_use]
    pub fn with_key_id(mut self, kid: Option<String>) -> Self {
        self.kid = kid;
        self
    }

    /// Registry algorithm named by `alg`, if supported
    #[must_use]
    pub fn algorithm(&self) -> Option<Algorithm> {
        Algorithm::lookup(&self.alg)
    }
}

impl<'de> Deserialize<'de> for Header {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut extra = Map::<String, Value>::deserialize(deserializer)?;
        let alg = match extra.remove("alg") {
            Some(Value::String(alg)) => alg,
            Some(_) => return Err(de::Error::custom("alg must be a string")),
            None => return Err(de::Error::missing_field("alg")),
        };
        let typ = take_string(&mut extra, "typ");
        let kid = take_string(&mut extra, "kid");
        Ok(Self {
            alg,
            typ,
            kid,
            extra,
        })
    }
}

fn take_string(members: &mut Map<String, Value>, name: &str) -> Option<String> {
    match members.remove(name) {
        Some(Value::String(value)) => Some(value),
        Some(Value::Null) | None => None,
        Some(other) => {
            members.insert(name.to_string(), other);
            None
        }
    }
}

/// A parsed token: header, payload and raw signature bytes
///
/// Only produced by a successful decode; there is no way to build one from
/// malformed input.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedToken {
    header: Header,
    payload: Payload,
    signature: Vec<u8>,
}

impl DecodedToken {
    pub(crate) fn new(header: Header, payload: Payload, signature: Vec<u8>) -> Self {
        Self {
            header,
            payload,
            signature,
        }
    }

    /// Token header
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Token claims
    #[must_use]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Raw signature bytes (JOSE form for ECDSA)
    #[must_use]
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Look up a single claim
    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }

    /// Split into header, payload and signature
    #[must_use]
    pub fn into_parts(self) -> (Header, Payload, Vec<u8>) {
        (self.header, self.payload, self.signature)
    }
}
