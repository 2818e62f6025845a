//! Token signing

use serde::Serialize;
use serde_json::Value;

use crate::algorithms::AlgorithmFamily;
use crate::base64url;
use crate::error::{JwtError, JwtResult};
use crate::keys::SigningKey;
use crate::options::SignOptions;
use crate::token;
use crate::traits::SignatureProvider;
use crate::transcode;
use crate::types::Header;

/// Sign `payload` and return the compact token.
///
/// # Errors
/// - [`JwtError::InvalidPayload`] if `payload` does not serialize to a JSON object
/// - [`JwtError::KeyNotSupplied`] for an empty secret
/// - [`JwtError::KeyMismatch`] if the key kind does not fit the algorithm family
/// - [`JwtError::InvalidKey`] or [`JwtError::Signing`] from the provider
pub fn sign<P, T>(provider: &P, payload: &T, options: &SignOptions) -> JwtResult<String>
where
    P: SignatureProvider + ?Sized,
    T: Serialize + ?Sized,
{
    let payload = serde_json::to_value(payload)?;
    if !payload.is_object() {
        return Err(JwtError::invalid_payload(json_kind(&payload)));
    }

    let spec = options.algorithm.spec();
    let header = Header::new(options.algorithm).with_key_id(options.kid.clone());
    let signing_input = token::signing_input(
        &token::encode_segment(&header)?,
        &token::encode_segment(&payload)?,
    );

    let signature = match (&options.key, spec.family) {
        (SigningKey::Secret(secret), _) if secret.is_empty() => {
            return Err(JwtError::KeyNotSupplied);
        }
        (SigningKey::Secret(secret), AlgorithmFamily::Hmac) => {
            provider.mac(spec, secret, signing_input.as_bytes())?
        }
        (SigningKey::Secret(_), _) => {
            return Err(JwtError::KeyMismatch(
                "secret keys can only be used with HMAC algorithms",
            ));
        }
        (SigningKey::Private(_), AlgorithmFamily::Hmac) => {
            return Err(JwtError::KeyMismatch(
                "HMAC algorithms require a shared secret",
            ));
        }
        (SigningKey::Private(key), AlgorithmFamily::Ecdsa) => {
            let der = provider.sign(spec, key, signing_input.as_bytes())?;
            transcode::der_to_jose(&der, spec.algorithm)?
        }
        (SigningKey::Private(key), AlgorithmFamily::Rsa | AlgorithmFamily::RsaPss) => {
            provider.sign(spec, key, signing_input.as_bytes())?
        }
    };

    let token = token::join(&signing_input, &base64url::encode(signature));
    tracing::debug!(alg = %options.algorithm, kid = ?options.kid, "signed jwt token");
    Ok(token)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
