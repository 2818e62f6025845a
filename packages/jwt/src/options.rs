//! Signing and verification options.

use chrono::Duration;

use crate::algorithms::Algorithm;
use crate::error::{JwtError, JwtResult};
use crate::keys::{SigningKey, VerificationKey};

/// Options for [`crate::sign`].
#[derive(Debug, Clone)]
pub struct SignOptions {
    /// Signing algorithm
    pub algorithm: Algorithm,
    /// Shared secret or private key
    pub key: SigningKey,
    /// Key ID written to the header
    pub kid: Option<String>,
}

impl SignOptions {
    /// Sign with `algorithm` using `key`.
    pub fn new(algorithm: Algorithm, key: SigningKey) -> Self {
        Self {
            algorithm,
            key,
            kid: None,
        }
    }

    /// Set the header key ID.
    pub fn with_kid(mut self, kid: impl Into<String>) -> Self {
        self.kid = Some(kid.into());
        self
    }
}

/// Algorithms a verifier accepts.
///
/// Defaults to every registry algorithm. An empty list accepts nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedAlgorithms(Vec<Algorithm>);

impl AllowedAlgorithms {
    /// Parse a list of JOSE names.
    ///
    /// # Errors
    /// Returns [`JwtError::AlgorithmNotSupported`] for a name outside the registry.
    pub fn from_names<I, S>(names: I) -> JwtResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| name.as_ref().parse::<Algorithm>())
            .collect::<JwtResult<Vec<_>>>()
            .map(Self)
    }

    /// Whether `algorithm` is accepted
    #[must_use]
    pub fn contains(&self, algorithm: Algorithm) -> bool {
        self.0.contains(&algorithm)
    }

    /// Accepted algorithms
    #[must_use]
    pub fn as_slice(&self) -> &[Algorithm] {
        &self.0
    }
}

impl Default for AllowedAlgorithms {
    fn default() -> Self {
        Self(Algorithm::ALL.to_vec())
    }
}

impl From<Algorithm> for AllowedAlgorithms {
    fn from(algorithm: Algorithm) -> Self {
        Self(vec![algorithm])
    }
}

impl From<Vec<Algorithm>> for AllowedAlgorithms {
    fn from(algorithms: Vec<Algorithm>) -> Self {
        Self(algorithms)
    }
}

impl From<&[Algorithm]> for AllowedAlgorithms {
    fn from(algorithms: &[Algorithm]) -> Self {
        Self(algorithms.to_vec())
    }
}

impl<const N: usize> From<[Algorithm; N]> for AllowedAlgorithms {
    fn from(algorithms: [Algorithm; N]) -> Self {
        Self(algorithms.to_vec())
    }
}

/// Options for [`crate::verify`].
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    /// Secret, public key, or resolver
    pub key: VerificationKey,
    /// Accepted `alg` values
    pub allowed_algorithms: AllowedAlgorithms,
    /// Required audience; an empty string disables the check
    pub audience: Option<String>,
    /// Required issuer; an empty string disables the check
    pub issuer: Option<String>,
    /// Skip the `exp` check entirely
    pub ignore_expiration: bool,
    /// Reject tokens without `exp`
    pub require_expiration: bool,
    /// Leeway for time-based claims; must not be negative
    pub clock_tolerance: Duration,
    /// Fixed evaluation time in Unix seconds; the system clock when `None`
    pub now: Option<i64>,
}

impl VerifyOptions {
    /// Verify with `key`, accepting every registry algorithm, no leeway.
    pub fn new(key: VerificationKey) -> Self {
        Self {
            key,
            allowed_algorithms: AllowedAlgorithms::default(),
            audience: None,
            issuer: None,
            ignore_expiration: false,
            require_expiration: false,
            clock_tolerance: Duration::zero(),
            now: None,
        }
    }

    /// Restrict the accepted algorithms.
    pub fn with_allowed_algorithms(mut self, algorithms: impl Into<AllowedAlgorithms>) -> Self {
        self.allowed_algorithms = algorithms.into();
        self
    }

    /// Require `aud` to equal or contain `audience`.
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Require `iss` to equal `issuer`.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Set whether to skip expiration.
    pub fn ignore_expiration(mut self, ignore: bool) -> Self {
        self.ignore_expiration = ignore;
        self
    }

    /// Set whether tokens must carry `exp`.
    pub fn require_expiration(mut self, require: bool) -> Self {
        self.require_expiration = require;
        self
    }

    /// Set the time leeway for validation.
    pub fn with_clock_tolerance(mut self, tolerance: Duration) -> Self {
        self.clock_tolerance = tolerance;
        self
    }

    /// Evaluate time claims at `unix_seconds` instead of the system clock.
    pub fn at(mut self, unix_seconds: i64) -> Self {
        self.now = Some(unix_seconds);
        self
    }

    /// Reject option combinations that cannot be evaluated.
    ///
    /// # Errors
    /// Returns [`JwtError::InvalidOptions`] for a negative clock tolerance.
    pub fn validate(&self) -> JwtResult<()> {
        if self.clock_tolerance < Duration::zero() {
            return Err(JwtError::InvalidOptions(
                "clockTolerance must be a non-negative number",
            ));
        }
        Ok(())
    }

    /// Clock tolerance in (possibly fractional) seconds, never negative
    pub(crate) fn tolerance_seconds(&self) -> f64 {
        (self.clock_tolerance.num_milliseconds() as f64 / 1000.0).max(0.0)
    }

    pub(crate) fn audience_filter(&self) -> Option<&str> {
        self.audience.as_deref().filter(|aud| !aud.is_empty())
    }

    pub(crate) fn issuer_filter(&self) -> Option<&str> {
        self.issuer.as_deref().filter(|iss| !iss.is_empty())
    }
}
