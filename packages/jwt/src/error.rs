//! JWT error types
//!
//! Errors returned through [`JwtError`] are caller-side problems: bad options, a
//! disallowed algorithm, missing or mismatched key material. Problems with the token
//! itself never surface here; verification reports them as `false`.

use thiserror::Error;

use crate::base64url::Base64UrlError;
use crate::transcode::TranscodeError;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
#[derive(Debug, Error)]
pub enum JwtError {
    /// The payload handed to the signer is not a JSON object
    #[error("Invalid payload passed to create JWT token: {0}")]
    InvalidPayload(String),

    /// The algorithm name is not one the engine knows
    #[error("JWT Algorithm {0} not supported")]
    AlgorithmNotSupported(String),

    /// The token's algorithm is outside the configured allowlist
    #[error("JWT Algorithm {0} not allowed")]
    AlgorithmNotAllowed(String),

    /// Key material does not fit the algorithm family
    #[error("Key mismatch: {0}")]
    KeyMismatch(&'static str),

    /// No usable key material was supplied or resolved
    #[error("Cannot process JWT token as public key, private key or secret not supplied")]
    KeyNotSupplied,

    /// Key material could not be parsed by the signature provider
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Malformed verification or signing options
    #[error("Invalid options: {0}")]
    InvalidOptions(&'static str),

    /// JSON serialization of header or payload failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Base64url decoding of caller-supplied material failed
    #[error(transparent)]
    Base64Url(#[from] Base64UrlError),

    /// The provider returned an ECDSA signature that could not be transcoded
    #[error(transparent)]
    Transcode(#[from] TranscodeError),

    /// The signature provider failed to produce a signature
    #[error("Signing error: {0}")]
    Signing(String),
}

impl JwtError {
    /// Create an invalid payload error
    #[inline]
    #[must_use]
    pub fn invalid_payload(msg: &str) -> Self {
        JwtError::InvalidPayload(msg.to_string())
    }

    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwtError::AlgorithmNotSupported(alg.to_string())
    }

    /// Create a disallowed algorithm error
    #[inline]
    #[must_use]
    pub fn algorithm_not_allowed(alg: &str) -> Self {
        JwtError::AlgorithmNotAllowed(alg.to_string())
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }

    /// Create a signing error
    #[inline]
    #[must_use]
    pub fn signing_error(msg: &str) -> Self {
        JwtError::Signing(msg.to_string())
    }
}
