//! Registered claim checks: `exp`, `nbf`, `iat`, `aud`, `iss`

use serde_json::Value;
use thiserror::Error;

use crate::options::VerifyOptions;
use crate::types::Payload;

/// Why a token's claims were rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimFailure {
    /// `now >= exp + tolerance`
    #[error("token expired")]
    Expired,

    /// `now + tolerance < nbf`
    #[error("token not yet valid")]
    NotYetValid,

    /// `iat - tolerance > now`
    #[error("token issued in the future")]
    IssuedInFuture,

    /// `exp` absent while expiration is required
    #[error("token has no expiration")]
    MissingExpiration,

    /// A time claim is present but is not a NumericDate
    #[error("claim {0} is not a NumericDate")]
    InvalidNumericDate(&'static str),

    /// `aud` neither equals nor contains the expected audience
    #[error("audience mismatch")]
    AudienceMismatch,

    /// `iss` differs from the expected issuer
    #[error("issuer mismatch")]
    IssuerMismatch,
}

/// Parse a NumericDate: a finite JSON number, or a non-empty string of ASCII digits.
#[must_use]
pub fn parse_numeric_date(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|secs| secs.is_finite()),
        Value::String(text) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
            text.parse().ok()
        }
        _ => None,
    }
}

/// Check the registered claims of `payload` at time `now` (Unix seconds).
///
/// `null` time claims count as absent. The clock tolerance is taken from `options`
/// and is expected to have passed [`VerifyOptions::validate`].
///
/// # Errors
/// Returns the first failing check.
pub fn validate_claims(payload: &Payload, options: &VerifyOptions, now: i64) -> Result<(), ClaimFailure> {
    let tolerance = options.tolerance_seconds();
    let now = now as f64;

    if !options.ignore_expiration {
        match time_claim(payload, "exp")? {
            Some(exp) if now >= exp + tolerance => return Err(ClaimFailure::Expired),
            Some(_) => {}
            None if options.require_expiration => return Err(ClaimFailure::MissingExpiration),
            None => {}
        }
    }

    if let Some(nbf) = time_claim(payload, "nbf")? {
        if now + tolerance < nbf {
            return Err(ClaimFailure::NotYetValid);
        }
    }

    if let Some(iat) = time_claim(payload, "iat")? {
        if iat - tolerance > now {
            return Err(ClaimFailure::IssuedInFuture);
        }
    }

    if let Some(expected) = options.audience_filter() {
        let matches = match payload.get("aud") {
            Some(Value::Array(audiences)) => audiences
                .iter()
                .any(|aud| aud.as_str() == Some(expected)),
            Some(Value::String(aud)) => aud == expected,
            _ => false,
        };
        if !matches {
            return Err(ClaimFailure::AudienceMismatch);
        }
    }

    if let Some(expected) = options.issuer_filter() {
        if payload.get("iss").and_then(Value::as_str) != Some(expected) {
            return Err(ClaimFailure::IssuerMismatch);
        }
    }

    Ok(())
}

fn time_claim(payload: &Payload, name: &'static str) -> Result<Option<f64>, ClaimFailure> {
    match payload.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => parse_numeric_date(value)
            .map(Some)
            .ok_or(ClaimFailure::InvalidNumericDate(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_dates() {
        assert_eq!(parse_numeric_date(&json!(1_700_000_000)), Some(1_700_000_000.0));
        assert_eq!(parse_numeric_date(&json!(1.5)), Some(1.5));
        assert_eq!(parse_numeric_date(&json!("1700000000")), Some(1_700_000_000.0));
        assert_eq!(parse_numeric_date(&json!("")), None);
        assert_eq!(parse_numeric_date(&json!("-5")), None);
        assert_eq!(parse_numeric_date(&json!("1.5")), None);
        assert_eq!(parse_numeric_date(&json!(true)), None);
    }

    #[test]
    fn null_time_claims_are_absent() {
        let payload = json!({"exp": null, "nbf": null})
            .as_object()
            .cloned()
            .unwrap();
        let options = VerifyOptions::new(crate::keys::VerificationKey::secret("s"));
        assert_eq!(validate_claims(&payload, &options, 100), Ok(()));
        assert_eq!(
            validate_claims(&payload, &options.require_expiration(true), 100),
            Err(ClaimFailure::MissingExpiration)
        );
    }
}
