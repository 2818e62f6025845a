//! Default signature provider backed by the RustCrypto crates

mod ecdsa;
mod hmac;
mod rsa;

use crate::algorithms::{AlgorithmFamily, AlgorithmSpec};
use crate::error::{JwtError, JwtResult};
use crate::keys::{PrivateKey, PublicKey, SecretKey};
use crate::traits::SignatureProvider;

/// Signature provider for every registry algorithm.
///
/// Private keys are PKCS#8 DER, public keys are SPKI DER. ECDSA signatures are
/// produced and consumed as DER.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoProvider;

impl SignatureProvider for RustCryptoProvider {
    fn mac(&self, spec: &AlgorithmSpec, secret: &SecretKey, message: &[u8]) -> JwtResult<Vec<u8>> {
        match spec.family {
            AlgorithmFamily::Hmac => hmac::mac(spec.digest, secret.as_bytes(), message),
            _ => Err(JwtError::KeyMismatch(
                "secret keys can only be used with HMAC algorithms",
            )),
        }
    }

    fn sign(&self, spec: &AlgorithmSpec, key: &PrivateKey, message: &[u8]) -> JwtResult<Vec<u8>> {
        match spec.family {
            AlgorithmFamily::Rsa => rsa::sign_pkcs1v15(spec.digest, key, message),
            AlgorithmFamily::RsaPss => rsa::sign_pss(spec.digest, key, message),
            AlgorithmFamily::Ecdsa => ecdsa::sign(spec.algorithm, key, message),
            AlgorithmFamily::Hmac => Err(JwtError::KeyMismatch(
                "HMAC algorithms require a shared secret",
            )),
        }
    }

    fn verify(
        &self,
        spec: &AlgorithmSpec,
        key: &PublicKey,
        message: &[u8],
        signature: &[u8],
    ) -> JwtResult<bool> {
        match spec.family {
            AlgorithmFamily::Rsa => rsa::verify_pkcs1v15(spec.digest, key, message, signature),
            AlgorithmFamily::RsaPss => rsa::verify_pss(spec.digest, key, message, signature),
            AlgorithmFamily::Ecdsa => ecdsa::verify(spec.algorithm, key, message, signature),
            AlgorithmFamily::Hmac => Err(JwtError::KeyMismatch(
                "HMAC algorithms require a shared secret",
            )),
        }
    }
}
