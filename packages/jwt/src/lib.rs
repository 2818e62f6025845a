//! JSON Web Token (JWT) signing, decoding and verification
//!
//! This crate provides compact JWS tokens with:
//! - HMAC (HS256/384/512), RSA PKCS#1 v1.5 (RS256/384/512), RSA-PSS (PS256/384/512)
//!   and ECDSA (ES256/384/512)
//! - ECDSA signature transcoding between ASN.1 DER and JOSE raw R||S
//! - Algorithm allowlists, key resolvers and JWK public keys
//! - Registered claim checks with clock tolerance
//!
//! ```no_run
//! use jwt_engine::{Algorithm, SignOptions, SigningKey, VerificationKey, VerifyOptions};
//! use serde_json::json;
//!
//! # fn main() -> jwt_engine::JwtResult<()> {
//! let token = jwt_engine::sign(
//!     &json!({"sub": "user-1"}),
//!     &SignOptions::new(Algorithm::Hs256, SigningKey::secret("shared-secret")),
//! )?;
//! let ok = jwt_engine::verify(
//!     &token,
//!     &VerifyOptions::new(VerificationKey::secret("shared-secret"))
//!         .with_allowed_algorithms(Algorithm::Hs256),
//! )?;
//! assert!(ok);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod algorithms;
pub mod base64url;
pub mod claims;
pub mod crypto;
pub mod der;
mod engine;
mod error;
pub mod jwk;
pub mod keys;
pub mod options;
pub mod signer;
pub mod token;
pub mod traits;
pub mod transcode;
mod types;
mod utils;
pub mod validation;
pub mod verifier;

pub use algorithms::{Algorithm, AlgorithmFamily, AlgorithmSpec, DigestAlgorithm};
pub use claims::ClaimsBuilder;
pub use crypto::RustCryptoProvider;
pub use engine::{JwtEngine, sign, verify, verify_token};
pub use error::*;
pub use jwk::{Jwk, rsa_public_key_der};
pub use keys::{
    KeyResolver, PrivateKey, PublicKey, ResolvedKey, SecretKey, SigningKey, VerificationKey,
};
pub use options::{AllowedAlgorithms, SignOptions, VerifyOptions};
pub use token::{decode, is_compact_jwt};
pub use traits::SignatureProvider;
pub use transcode::{TranscodeError, der_to_jose, jose_to_der};
pub use types::*;
pub use utils::{constant_time_eq, unix_timestamp};
pub use validation::ClaimFailure;
pub use verifier::Rejection;
