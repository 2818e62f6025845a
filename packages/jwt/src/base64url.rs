//! Base64url codec (RFC 7515 section 2)
//!
//! Text-level helpers convert between standard base64 and base64url so that
//! base64 produced elsewhere can be carried in a token. The byte-level [`decode`]
//! restores padding explicitly and refuses lengths that no byte string can produce.

use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};
use thiserror::Error;

/// Base64url decoding failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Base64UrlError {
    /// A character outside `A-Z a-z 0-9 - _` was found
    #[error("invalid base64url character at position {0}")]
    InvalidCharacter(usize),

    /// Length mod 4 == 1, which no byte string encodes to
    #[error("invalid base64url length {0}")]
    InvalidLength(usize),

    /// The padded text was rejected by the base64 decoder
    #[error("base64 decode error: {0}")]
    Decode(String),
}

/// True for bytes of the base64url alphabet.
#[inline]
#[must_use]
pub fn is_base64url_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_'
}

/// Convert standard base64 text to base64url: `+` -> `-`, `/` -> `_`, trailing `=` removed.
#[must_use]
pub fn to_base64url(base64: &str) -> String {
    base64
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect()
}

/// Convert base64url text back to padded standard base64.
///
/// # Errors
/// Returns [`Base64UrlError::InvalidLength`] when the length leaves a remainder of 1.
pub fn to_base64(base64url: &str) -> Result<String, Base64UrlError> {
    let padding = match base64url.len() % 4 {
        0 => "",
        2 => "==",
        3 => "=",
        _ => return Err(Base64UrlError::InvalidLength(base64url.len())),
    };

    let mut base64: String = base64url
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    base64.push_str(padding);
    Ok(base64)
}

/// Encode bytes as unpadded base64url.
#[inline]
#[must_use]
pub fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode unpadded base64url into bytes.
///
/// # Errors
/// Fails on characters outside the base64url alphabet, on a length remainder of 1,
/// and on anything the base64 decoder rejects (such as non-zero trailing bits).
pub fn decode(input: &str) -> Result<Vec<u8>, Base64UrlError> {
    if let Some(position) = input.bytes().position(|b| !is_base64url_byte(b)) {
        return Err(Base64UrlError::InvalidCharacter(position));
    }

    let base64 = to_base64(input)?;
    STANDARD
        .decode(base64)
        .map_err(|e| Base64UrlError::Decode(e.to_string()))
}

/// Decode base64url into a UTF-8 string.
///
/// # Errors
/// Fails when decoding fails or the bytes are not valid UTF-8.
pub fn decode_to_string(input: &str) -> Result<String, Base64UrlError> {
    let bytes = decode(input)?;
    String::from_utf8(bytes).map_err(|e| Base64UrlError::Decode(e.to_string()))
}
