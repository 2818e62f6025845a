//! JWT algorithm registry
//!
//! A static, read-only table keyed by the JOSE `alg` identifier. Signing and
//! verification share the one supported set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::JwtError;

/// Supported JWT signing algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC with SHA-256
    Hs256,
    /// HMAC with SHA-384
    Hs384,
    /// HMAC with SHA-512
    Hs512,
    /// RSASSA-PKCS1-v1_5 with SHA-256
    Rs256,
    /// RSASSA-PKCS1-v1_5 with SHA-384
    Rs384,
    /// RSASSA-PKCS1-v1_5 with SHA-512
    Rs512,
    /// RSASSA-PSS with SHA-256
    Ps256,
    /// RSASSA-PSS with SHA-384
    Ps384,
    /// RSASSA-PSS with SHA-512
    Ps512,
    /// ECDSA P-256 with SHA-256
    Es256,
    /// ECDSA P-384 with SHA-384
    Es384,
    /// ECDSA P-521 with SHA-512
    Es512,
}

/// Signature family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// Shared-secret MAC
    Hmac,
    /// RSASSA-PKCS1-v1_5
    Rsa,
    /// RSASSA-PSS, salt length equal to the digest length
    RsaPss,
    /// ECDSA, JOSE raw R||S on the wire
    Ecdsa,
}

/// Digest used by an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
}

impl DigestAlgorithm {
    /// Digest output length in bytes
    #[must_use]
    pub const fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Sha256 => 32,
            DigestAlgorithm::Sha384 => 48,
            DigestAlgorithm::Sha512 => 64,
        }
    }
}

/// Registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmSpec {
    /// JOSE algorithm
    pub algorithm: Algorithm,
    /// Signature family
    pub family: AlgorithmFamily,
    /// Digest
    pub digest: DigestAlgorithm,
    /// Algorithm name handed to signature providers for both signing and verification
    pub provider_name: &'static str,
    /// Byte length of each of R and S (ECDSA only)
    pub component_len: Option<usize>,
}

const fn entry(
    algorithm: Algorithm,
    family: AlgorithmFamily,
    digest: DigestAlgorithm,
    provider_name: &'static str,
    component_len: Option<usize>,
) -> AlgorithmSpec {
    AlgorithmSpec {
        algorithm,
        family,
        digest,
        provider_name,
        component_len,
    }
}

use AlgorithmFamily::{Ecdsa, Hmac, Rsa, RsaPss};
use DigestAlgorithm::{Sha256, Sha384, Sha512};

static REGISTRY: [AlgorithmSpec; 12] = [
    entry(Algorithm::Hs256, Hmac, Sha256, "HmacSHA256", None),
    entry(Algorithm::Hs384, Hmac, Sha384, "HmacSHA384", None),
    entry(Algorithm::Hs512, Hmac, Sha512, "HmacSHA512", None),
    entry(Algorithm::Rs256, Rsa, Sha256, "SHA256withRSA", None),
    entry(Algorithm::Rs384, Rsa, Sha384, "SHA384withRSA", None),
    entry(Algorithm::Rs512, Rsa, Sha512, "SHA512withRSA", None),
    entry(Algorithm::Ps256, RsaPss, Sha256, "SHA256withRSA/PSS", None),
    entry(Algorithm::Ps384, RsaPss, Sha384, "SHA384withRSA/PSS", None),
    entry(Algorithm::Ps512, RsaPss, Sha512, "SHA512withRSA/PSS", None),
    entry(Algorithm::Es256, Ecdsa, Sha256, "SHA256withECDSA", Some(32)),
    entry(Algorithm::Es384, Ecdsa, Sha384, "SHA384withECDSA", Some(48)),
    entry(Algorithm::Es512, Ecdsa, Sha512, "SHA512withECDSA", Some(66)),
];

impl Algorithm {
    /// Every supported algorithm, in registry order
    pub const ALL: [Algorithm; 12] = [
        Algorithm::Hs256,
        Algorithm::Hs384,
        Algorithm::Hs512,
        Algorithm::Rs256,
        Algorithm::Rs384,
        Algorithm::Rs512,
        Algorithm::Ps256,
        Algorithm::Ps384,
        Algorithm::Ps512,
        Algorithm::Es256,
        Algorithm::Es384,
        Algorithm::Es512,
    ];

    /// JOSE `alg` identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Algorithm::Hs256 => "HS256",
            Algorithm::Hs384 => "HS384",
            Algorithm::Hs512 => "HS512",
            Algorithm::Rs256 => "RS256",
            Algorithm::Rs384 => "RS384",
            Algorithm::Rs512 => "RS512",
            Algorithm::Ps256 => "PS256",
            Algorithm::Ps384 => "PS384",
            Algorithm::Ps512 => "PS512",
            Algorithm::Es256 => "ES256",
            Algorithm::Es384 => "ES384",
            Algorithm::Es512 => "ES512",
        }
    }

    /// Registry entry for this algorithm
    #[must_use]
    pub fn spec(self) -> &'static AlgorithmSpec {
        // REGISTRY is laid out in the same order as ALL.
        &REGISTRY[self as usize]
    }

    /// Signature family
    #[must_use]
    pub fn family(self) -> AlgorithmFamily {
        self.spec().family
    }

    /// Look up an algorithm by exact `alg` identifier
    #[must_use]
    pub fn lookup(name: &str) -> Option<Algorithm> {
        Algorithm::ALL.into_iter().find(|alg| alg.as_str() == name)
    }
}

/// Registry lookup by `alg` identifier; `None` means "not supported".
#[must_use]
pub fn lookup(name: &str) -> Option<&'static AlgorithmSpec> {
    Algorithm::lookup(name).map(Algorithm::spec)
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::lookup(s).ok_or_else(|| JwtError::unsupported_algorithm(s))
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Algorithm::lookup(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("JWT Algorithm {name} not supported")))
    }
}
