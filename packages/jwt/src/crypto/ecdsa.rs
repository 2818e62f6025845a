//! ECDSA over P-256, P-384 and P-521 with DER-encoded signatures

use p256::pkcs8::{DecodePrivateKey, DecodePublicKey};

use crate::algorithms::Algorithm;
use crate::error::{JwtError, JwtResult};
use crate::keys::{PrivateKey, PublicKey};

fn invalid_private(curve: &str, e: impl std::fmt::Display) -> JwtError {
    JwtError::InvalidKey(format!("Invalid {curve} private key: {e}"))
}

fn invalid_public(curve: &str, e: impl std::fmt::Display) -> JwtError {
    JwtError::InvalidKey(format!("Invalid {curve} public key: {e}"))
}

fn signing_failed(e: impl std::fmt::Display) -> JwtError {
    JwtError::Signing(format!("ECDSA signing failed: {e}"))
}

/// Sign and return the DER signature.
pub(super) fn sign(algorithm: Algorithm, key: &PrivateKey, message: &[u8]) -> JwtResult<Vec<u8>> {
    match algorithm {
        Algorithm::Es256 => {
            use p256::ecdsa::{Signature, SigningKey, signature::Signer};
            let signing_key = SigningKey::from_pkcs8_der(key.as_der())
                .map_err(|e| invalid_private("P-256", e))?;
            let signature: Signature = signing_key.try_sign(message).map_err(signing_failed)?;
            Ok(signature.to_der().as_bytes().to_vec())
        }
        Algorithm::Es384 => {
            use p384::ecdsa::{Signature, SigningKey, signature::Signer};
            let signing_key = SigningKey::from_pkcs8_der(key.as_der())
                .map_err(|e| invalid_private("P-384", e))?;
            let signature: Signature = signing_key.try_sign(message).map_err(signing_failed)?;
            Ok(signature.to_der().as_bytes().to_vec())
        }
        Algorithm::Es512 => {
            use p521::ecdsa::{Signature, SigningKey, signature::Signer};
            let secret = p521::SecretKey::from_pkcs8_der(key.as_der())
                .map_err(|e| invalid_private("P-521", e))?;
            let signing_key = SigningKey::from_bytes(&secret.to_bytes())
                .map_err(|e| invalid_private("P-521", e))?;
            let signature: Signature = signing_key.try_sign(message).map_err(signing_failed)?;
            Ok(signature.to_der().as_bytes().to_vec())
        }
        other => Err(JwtError::unsupported_algorithm(other.as_str())),
    }
}

/// Verify a DER signature; undecodable DER is a failed verification.
pub(super) fn verify(
    algorithm: Algorithm,
    key: &PublicKey,
    message: &[u8],
    signature: &[u8],
) -> JwtResult<bool> {
    match algorithm {
        Algorithm::Es256 => {
            use p256::ecdsa::{Signature, VerifyingKey, signature::Verifier};
            let verifying_key = VerifyingKey::from_public_key_der(key.as_der())
                .map_err(|e| invalid_public("P-256", e))?;
            let Ok(signature) = Signature::from_der(signature) else {
                return Ok(false);
            };
            Ok(verifying_key.verify(message, &signature).is_ok())
        }
        Algorithm::Es384 => {
            use p384::ecdsa::{Signature, VerifyingKey, signature::Verifier};
            let verifying_key = VerifyingKey::from_public_key_der(key.as_der())
                .map_err(|e| invalid_public("P-384", e))?;
            let Ok(signature) = Signature::from_der(signature) else {
                return Ok(false);
            };
            Ok(verifying_key.verify(message, &signature).is_ok())
        }
        Algorithm::Es512 => {
            use p521::ecdsa::{Signature, VerifyingKey, signature::Verifier};
            let public_key = p521::PublicKey::from_public_key_der(key.as_der())
                .map_err(|e| invalid_public("P-521", e))?;
            let verifying_key = VerifyingKey::from_sec1_bytes(&public_key.to_sec1_bytes())
                .map_err(|e| invalid_public("P-521", e))?;
            let Ok(signature) = Signature::from_der(signature) else {
                return Ok(false);
            };
            Ok(verifying_key.verify(message, &signature).is_ok())
        }
        other => Err(JwtError::unsupported_algorithm(other.as_str())),
    }
}
