//! Signature provider interface.

use crate::algorithms::AlgorithmSpec;
use crate::error::JwtResult;
use crate::keys::{PrivateKey, PublicKey, SecretKey};

/// Cryptographic backend used by the signer and verifier.
///
/// The engine never touches key internals; it hands the provider a registry entry,
/// an encoded key handle and the signing input. ECDSA signatures cross this boundary
/// in ASN.1 DER form, never JOSE raw form.
///
/// Implementations must be thread-safe (Send + Sync).
pub trait SignatureProvider: Send + Sync {
    /// Compute an HMAC digest over `message`.
    ///
    /// # Errors
    /// Fails if the algorithm is not an HMAC algorithm or the MAC cannot be keyed.
    fn mac(&self, spec: &AlgorithmSpec, secret: &SecretKey, message: &[u8]) -> JwtResult<Vec<u8>>;

    /// Sign `message` with an asymmetric private key.
    ///
    /// # Errors
    /// Returns [`crate::JwtError::InvalidKey`] if the key cannot be parsed for the
    /// algorithm, or a signing error if the backend fails.
    fn sign(&self, spec: &AlgorithmSpec, key: &PrivateKey, message: &[u8]) -> JwtResult<Vec<u8>>;

    /// Verify an asymmetric signature.
    ///
    /// `Ok(false)` means the signature does not match or is malformed.
    ///
    /// # Errors
    /// Returns [`crate::JwtError::InvalidKey`] if the key cannot be parsed for the
    /// algorithm.
    fn verify(
        &self,
        spec: &AlgorithmSpec,
        key: &PublicKey,
        message: &[u8],
        signature: &[u8],
    ) -> JwtResult<bool>;
}

/// Implementation of SignatureProvider for Arc<T> to allow shared ownership.
impl<T: SignatureProvider + ?Sized> SignatureProvider for std::sync::Arc<T> {
    fn mac(&self, spec: &AlgorithmSpec, secret: &SecretKey, message: &[u8]) -> JwtResult<Vec<u8>> {
        (**self).mac(spec, secret, message)
    }

    fn sign(&self, spec: &AlgorithmSpec, key: &PrivateKey, message: &[u8]) -> JwtResult<Vec<u8>> {
        (**self).sign(spec, key, message)
    }

    fn verify(
        &self,
        spec: &AlgorithmSpec,
        key: &PublicKey,
        message: &[u8],
        signature: &[u8],
    ) -> JwtResult<bool> {
        (**self).verify(spec, key, message, signature)
    }
}
