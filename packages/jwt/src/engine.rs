//! Engine entry point
//!
//! [`JwtEngine`] binds a [`SignatureProvider`] to the signer, verifier and decoder.
//! The crate-root functions use the default RustCrypto provider.

use serde::Serialize;

use crate::crypto::RustCryptoProvider;
use crate::error::JwtResult;
use crate::options::{SignOptions, VerifyOptions};
use crate::signer;
use crate::token;
use crate::traits::SignatureProvider;
use crate::types::DecodedToken;
use crate::verifier::{self, Rejection};

/// JWT engine over a signature provider
#[derive(Debug, Clone, Default)]
pub struct JwtEngine<P = RustCryptoProvider> {
    provider: P,
}

impl JwtEngine {
    /// Engine backed by the RustCrypto provider
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: SignatureProvider> JwtEngine<P> {
    /// Engine backed by a custom provider
    #[inline]
    #[must_use]
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Signature provider in use
    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Sign `payload`. See [`signer::sign`].
    ///
    /// # Errors
    /// Fails on a non-object payload or on missing or mismatched key material.
    pub fn sign<T: Serialize + ?Sized>(&self, payload: &T, options: &SignOptions) -> JwtResult<String> {
        signer::sign(&self.provider, payload, options)
    }

    /// Verify `token`. See [`verifier::verify`].
    ///
    /// # Errors
    /// Fails only on caller misconfiguration; bad tokens are `Ok(false)`.
    pub fn verify(&self, token: &str, options: &VerifyOptions) -> JwtResult<bool> {
        verifier::verify(&self.provider, token, options)
    }

    /// Verify `token` and return it decoded. See [`verifier::verify_token`].
    ///
    /// # Errors
    /// Fails only on caller misconfiguration; bad tokens are `Ok(Err(_))`.
    pub fn verify_token(
        &self,
        token: &str,
        options: &VerifyOptions,
    ) -> JwtResult<Result<DecodedToken, Rejection>> {
        verifier::verify_token(&self.provider, token, options)
    }

    /// Decode without verifying.
    #[must_use]
    pub fn decode(&self, token: &str) -> Option<DecodedToken> {
        token::decode(token)
    }
}

/// Sign `payload` with the default provider.
///
/// # Errors
/// See [`signer::sign`].
pub fn sign<T: Serialize + ?Sized>(payload: &T, options: &SignOptions) -> JwtResult<String> {
    signer::sign(&RustCryptoProvider, payload, options)
}

/// Verify `token` with the default provider.
///
/// # Errors
/// See [`verifier::verify`].
pub fn verify(token: &str, options: &VerifyOptions) -> JwtResult<bool> {
    verifier::verify(&RustCryptoProvider, token, options)
}

/// Verify `token` with the default provider and return it decoded.
///
/// # Errors
/// See [`verifier::verify_token`].
pub fn verify_token(
    token: &str,
    options: &VerifyOptions,
) -> JwtResult<Result<DecodedToken, Rejection>> {
    verifier::verify_token(&RustCryptoProvider, token, options)
}
