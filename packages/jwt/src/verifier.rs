//! Token verification
//!
//! Verification is total over untrusted input: a malformed token, a bad signature or a
//! failed claim check yields `false` (or a [`Rejection`]), never an error. Errors are
//! reserved for caller misconfiguration.

use thiserror::Error;

use crate::algorithms::{Algorithm, AlgorithmFamily, AlgorithmSpec};
use crate::base64url;
use crate::error::{JwtError, JwtResult};
use crate::keys::{ConcreteKey, PublicKeyKind, VerificationKey};
use crate::options::VerifyOptions;
use crate::token::{self, Segments};
use crate::traits::SignatureProvider;
use crate::transcode;
use crate::types::DecodedToken;
use crate::utils::{constant_time_eq, unix_timestamp};
use crate::validation::{ClaimFailure, validate_claims};

/// Why a token failed verification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Wrong shape, undecodable segment, or missing `alg`
    #[error("malformed token")]
    Malformed,

    /// Signature does not verify under the supplied key
    #[error("invalid signature")]
    InvalidSignature,

    /// Signature verified but a registered claim check failed
    #[error("claim check failed: {0}")]
    Claim(#[from] ClaimFailure),
}

/// Verify `token` and return its decoded form, or the reason it was rejected.
///
/// # Errors
/// - [`JwtError::InvalidOptions`] for a negative clock tolerance
/// - [`JwtError::AlgorithmNotAllowed`] if `alg` is unknown or outside the allowlist
/// - [`JwtError::KeyNotSupplied`] if no usable key is supplied or resolved
/// - [`JwtError::KeyMismatch`] if the key kind (secret, RSA or EC) does not fit the
///   algorithm family
/// - [`JwtError::InvalidKey`] if the provider cannot parse the key
pub fn verify_token<P>(
    provider: &P,
    token: &str,
    options: &VerifyOptions,
) -> JwtResult<Result<DecodedToken, Rejection>>
where
    P: SignatureProvider + ?Sized,
{
    options.validate()?;

    let Some(segments) = Segments::split(token) else {
        tracing::debug!("jwt token does not have the compact shape");
        return Ok(Err(Rejection::Malformed));
    };
    let Some(decoded) = token::decode_segments(&segments) else {
        return Ok(Err(Rejection::Malformed));
    };

    let alg = decoded.header().alg.as_str();
    if alg.is_empty() {
        tracing::debug!("jwt token has no alg");
        return Ok(Err(Rejection::Malformed));
    }

    let algorithm = match Algorithm::lookup(alg) {
        Some(algorithm) if options.allowed_algorithms.contains(algorithm) => algorithm,
        _ => {
            tracing::warn!(alg, "jwt token algorithm not allowed");
            return Err(JwtError::algorithm_not_allowed(alg));
        }
    };
    let spec = algorithm.spec();

    let key = resolve_key(&options.key, &decoded)?;
    check_key(&key, spec)?;

    let content = segments.signing_input();
    if !signature_matches(provider, spec, &key, &content, segments.signature)? {
        tracing::debug!(alg, "jwt token signature rejected");
        return Ok(Err(Rejection::InvalidSignature));
    }

    let now = options.now.unwrap_or_else(unix_timestamp);
    if let Err(failure) = validate_claims(decoded.payload(), options, now) {
        tracing::debug!(alg, reason = %failure, "jwt token claims rejected");
        return Ok(Err(Rejection::Claim(failure)));
    }

    Ok(Ok(decoded))
}

/// Verify `token`'s signature and registered claims.
///
/// # Errors
/// Same as [`verify_token`]; every problem with the token itself is `Ok(false)`.
pub fn verify<P>(provider: &P, token: &str, options: &VerifyOptions) -> JwtResult<bool>
where
    P: SignatureProvider + ?Sized,
{
    Ok(verify_token(provider, token, options)?.is_ok())
}

fn resolve_key(key: &VerificationKey, decoded: &DecodedToken) -> JwtResult<ConcreteKey> {
    let key = match key {
        VerificationKey::Secret(secret) => ConcreteKey::Secret(secret.clone()),
        VerificationKey::Public(public) => ConcreteKey::Public(public.clone()),
        VerificationKey::Resolver(resolve) => resolve(decoded)
            .and_then(|resolved| resolved.into_concrete())
            .ok_or(JwtError::KeyNotSupplied)?,
    };

    match key {
        ConcreteKey::Secret(ref secret) if secret.is_empty() => Err(JwtError::KeyNotSupplied),
        key => Ok(key),
    }
}

fn check_key(key: &ConcreteKey, spec: &AlgorithmSpec) -> JwtResult<()> {
    match (key, spec.family) {
        (ConcreteKey::Secret(_), AlgorithmFamily::Hmac) => Ok(()),
        (ConcreteKey::Public(_), AlgorithmFamily::Hmac) => Err(JwtError::KeyMismatch(
            "HMAC verification requires a shared secret",
        )),
        (ConcreteKey::Secret(_), _) => Err(JwtError::KeyMismatch(
            "secret keys can only be used with HMAC algorithms",
        )),
        (ConcreteKey::Public(public), family) => match (public.kind(), family) {
            (Some(PublicKeyKind::Ec), AlgorithmFamily::Rsa | AlgorithmFamily::RsaPss) => Err(
                JwtError::KeyMismatch("RSA algorithms require an RSA public key"),
            ),
            (Some(PublicKeyKind::Rsa), AlgorithmFamily::Ecdsa) => Err(JwtError::KeyMismatch(
                "ECDSA algorithms require an EC public key",
            )),
            _ => Ok(()),
        },
    }
}

fn signature_matches<P>(
    provider: &P,
    spec: &AlgorithmSpec,
    key: &ConcreteKey,
    content: &str,
    signature_segment: &str,
) -> JwtResult<bool>
where
    P: SignatureProvider + ?Sized,
{
    match key {
        ConcreteKey::Secret(secret) => {
            // Compared as base64url text against the recomputed digest
            let expected = base64url::encode(provider.mac(spec, secret, content.as_bytes())?);
            Ok(constant_time_eq(
                signature_segment.as_bytes(),
                expected.as_bytes(),
            ))
        }
        ConcreteKey::Public(public) => {
            let Ok(raw) = base64url::decode(signature_segment) else {
                return Ok(false);
            };
            let signature = if spec.family == AlgorithmFamily::Ecdsa {
                match transcode::jose_to_der(&raw, spec.algorithm) {
                    Ok(der) => der,
                    Err(e) => {
                        tracing::debug!(error = %e, "jwt token signature could not be transcoded");
                        return Ok(false);
                    }
                }
            } else {
                raw
            };
            provider.verify(spec, public, content.as_bytes(), &signature)
        }
    }
}
