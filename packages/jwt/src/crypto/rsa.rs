//! RSA signatures: PKCS#1 v1.5 (RS256/384/512) and PSS (PS256/384/512)

use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::rand_core::OsRng;
use rsa::signature::{RandomizedSigner, SignatureEncoding, Signer, Verifier};
use rsa::{RsaPrivateKey, RsaPublicKey, pkcs1v15, pss};
use sha2::{Sha256, Sha384, Sha512};

use crate::algorithms::DigestAlgorithm;
use crate::error::{JwtError, JwtResult};
use crate::keys::{PrivateKey, PublicKey};

fn private_key(key: &PrivateKey) -> JwtResult<RsaPrivateKey> {
    RsaPrivateKey::from_pkcs8_der(key.as_der())
        .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA private key: {e}")))
}

fn public_key(key: &PublicKey) -> JwtResult<RsaPublicKey> {
    RsaPublicKey::from_public_key_der(key.as_der())
        .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA public key: {e}")))
}

pub(super) fn sign_pkcs1v15(
    digest: DigestAlgorithm,
    key: &PrivateKey,
    message: &[u8],
) -> JwtResult<Vec<u8>> {
    let key = private_key(key)?;
    let signature = match digest {
        DigestAlgorithm::Sha256 => pkcs1v15::SigningKey::<Sha256>::new(key).try_sign(message),
        DigestAlgorithm::Sha384 => pkcs1v15::SigningKey::<Sha384>::new(key).try_sign(message),
        DigestAlgorithm::Sha512 => pkcs1v15::SigningKey::<Sha512>::new(key).try_sign(message),
    }
    .map_err(|e| JwtError::Signing(format!("RSA signing failed: {e}")))?;
    Ok(signature.to_vec())
}

/// Salt length equals the digest length.
pub(super) fn sign_pss(
    digest: DigestAlgorithm,
    key: &PrivateKey,
    message: &[u8],
) -> JwtResult<Vec<u8>> {
    let key = private_key(key)?;
    let mut rng = OsRng;
    let signature = match digest {
        DigestAlgorithm::Sha256 => {
            pss::SigningKey::<Sha256>::new(key).try_sign_with_rng(&mut rng, message)
        }
        DigestAlgorithm::Sha384 => {
            pss::SigningKey::<Sha384>::new(key).try_sign_with_rng(&mut rng, message)
        }
        DigestAlgorithm::Sha512 => {
            pss::SigningKey::<Sha512>::new(key).try_sign_with_rng(&mut rng, message)
        }
    }
    .map_err(|e| JwtError::Signing(format!("RSA-PSS signing failed: {e}")))?;
    Ok(signature.to_vec())
}

pub(super) fn verify_pkcs1v15(
    digest: DigestAlgorithm,
    key: &PublicKey,
    message: &[u8],
    signature: &[u8],
) -> JwtResult<bool> {
    let key = public_key(key)?;
    let Ok(signature) = pkcs1v15::Signature::try_from(signature) else {
        return Ok(false);
    };

    let verified = match digest {
        DigestAlgorithm::Sha256 => {
            pkcs1v15::VerifyingKey::<Sha256>::new(key).verify(message, &signature)
        }
        DigestAlgorithm::Sha384 => {
            pkcs1v15::VerifyingKey::<Sha384>::new(key).verify(message, &signature)
        }
        DigestAlgorithm::Sha512 => {
            pkcs1v15::VerifyingKey::<Sha512>::new(key).verify(message, &signature)
        }
    };
    Ok(verified.is_ok())
}

pub(super) fn verify_pss(
    digest: DigestAlgorithm,
    key: &PublicKey,
    message: &[u8],
    signature: &[u8],
) -> JwtResult<bool> {
    let key = public_key(key)?;
    let Ok(signature) = pss::Signature::try_from(signature) else {
        return Ok(false);
    };

    let verified = match digest {
        DigestAlgorithm::Sha256 => pss::VerifyingKey::<Sha256>::new(key).verify(message, &signature),
        DigestAlgorithm::Sha384 => pss::VerifyingKey::<Sha384>::new(key).verify(message, &signature),
        DigestAlgorithm::Sha512 => pss::VerifyingKey::<Sha512>::new(key).verify(message, &signature),
    };
    Ok(verified.is_ok())
}
