//! Compact serialization: shape check, segment split/join and unverified decoding

use serde::Serialize;

use crate::base64url;
use crate::error::JwtResult;
use crate::types::{DecodedToken, Header, Payload};

/// The three text segments of a compact token, borrowed from the token string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments<'a> {
    /// base64url header
    pub header: &'a str,
    /// base64url payload
    pub payload: &'a str,
    /// base64url signature, possibly empty
    pub signature: &'a str,
}

impl<'a> Segments<'a> {
    /// Split a token that has the compact shape; `None` otherwise.
    #[must_use]
    pub fn split(token: &'a str) -> Option<Self> {
        if !is_compact_jwt(token) {
            return None;
        }

        let mut parts = token.splitn(3, '.');
        let header = parts.next()?;
        let payload = parts.next()?;
        let signature = parts.next()?;
        Some(Self {
            header,
            payload,
            signature,
        })
    }

    /// `header.payload`, the exact bytes the signature covers
    #[must_use]
    pub fn signing_input(&self) -> String {
        signing_input(self.header, self.payload)
    }
}

/// True when `token` is `segment.segment.segment` over the base64url alphabet, with
/// only the third segment allowed to be empty.
#[must_use]
pub fn is_compact_jwt(token: &str) -> bool {
    let mut parts = token.split('.');
    let (Some(header), Some(payload), Some(signature), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let alphabet = |segment: &str| segment.bytes().all(base64url::is_base64url_byte);
    !header.is_empty()
        && !payload.is_empty()
        && alphabet(header)
        && alphabet(payload)
        && alphabet(signature)
}

/// Join header and payload segments with `.`
#[must_use]
pub fn signing_input(header: &str, payload: &str) -> String {
    let mut input = String::with_capacity(header.len() + 1 + payload.len());
    input.push_str(header);
    input.push('.');
    input.push_str(payload);
    input
}

/// Append the signature segment to a signing input
#[must_use]
pub fn join(signing_input: &str, signature: &str) -> String {
    let mut token = String::with_capacity(signing_input.len() + 1 + signature.len());
    token.push_str(signing_input);
    token.push('.');
    token.push_str(signature);
    token
}

/// Serialize a value to JSON and base64url-encode it
///
/// # Errors
/// Returns a serialization error if `value` cannot be represented as JSON.
pub fn encode_segment<T: Serialize + ?Sized>(value: &T) -> JwtResult<String> {
    let json = serde_json::to_vec(value)?;
    Ok(base64url::encode(json))
}

/// Decode a token without checking its signature.
///
/// Returns `None` when the shape is wrong, a segment is not valid base64url, the
/// header or payload is not a JSON object, the header has no string `alg`, or the
/// signature segment is empty.
#[must_use]
pub fn decode(token: &str) -> Option<DecodedToken> {
    let segments = Segments::split(token)?;
    decode_segments(&segments)
}

pub(crate) fn decode_segments(segments: &Segments<'_>) -> Option<DecodedToken> {
    let header: Header = match decode_json(segments.header) {
        Some(header) => header,
        None => {
            tracing::debug!("Error decoding jwt token header");
            return None;
        }
    };

    let payload: Payload = match decode_json(segments.payload) {
        Some(payload) => payload,
        None => {
            tracing::debug!("Error decoding jwt token payload");
            return None;
        }
    };

    if segments.signature.is_empty() {
        tracing::debug!("jwt token has an empty signature segment");
        return None;
    }
    let signature = base64url::decode(segments.signature).ok()?;

    Some(DecodedToken::new(header, payload, signature))
}

fn decode_json<T: serde::de::DeserializeOwned>(segment: &str) -> Option<T> {
    let bytes = base64url::decode(segment).ok()?;
    serde_json::from_slice(&bytes).ok()
}
