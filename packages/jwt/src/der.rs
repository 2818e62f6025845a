//! Minimal ASN.1 DER reader/writer
//!
//! Covers exactly what ECDSA signatures and SubjectPublicKeyInfo structures need:
//! definite lengths in short and long form, unsigned INTEGERs, SEQUENCEs and
//! pre-encoded TLVs such as OIDs.

use thiserror::Error;

/// SEQUENCE tag
pub const TAG_SEQUENCE: u8 = 0x30;
/// INTEGER tag
pub const TAG_INTEGER: u8 = 0x02;
/// BIT STRING tag
pub const TAG_BIT_STRING: u8 = 0x03;

/// DER parse failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DerError {
    /// Input ended before the element was complete
    #[error("unexpected end of DER input")]
    Truncated,

    /// Tag differs from the one the structure requires
    #[error("unexpected DER tag 0x{found:02x}, expected 0x{expected:02x}")]
    UnexpectedTag {
        /// Tag required at this position
        expected: u8,
        /// Tag present in the input
        found: u8,
    },

    /// Indefinite or oversized length encoding
    #[error("unsupported DER length encoding")]
    BadLength,

    /// Declared length runs past the end of the input
    #[error("DER length overruns input")]
    Overrun,
}

/// Encode a definite length in short (< 128) or long form.
#[must_use]
pub fn encode_length(length: usize) -> Vec<u8> {
    if length < 0x80 {
        // Short form always fits in one byte here.
        return vec![length as u8];
    }

    let be = length.to_be_bytes();
    let first_significant = be.iter().position(|&b| b != 0).unwrap_or(be.len() - 1);
    let significant = &be[first_significant..];

    let mut out = Vec::with_capacity(1 + significant.len());
    out.push(0x80 | significant.len() as u8);
    out.extend_from_slice(significant);
    out
}

/// Read a definite length starting at `offset`; returns the length and the offset of
/// the first content byte.
///
/// # Errors
/// Fails on truncated input, indefinite lengths (`0x80`) and lengths wider than `usize`.
pub fn read_length(input: &[u8], offset: usize) -> Result<(usize, usize), DerError> {
    let first = *input.get(offset).ok_or(DerError::Truncated)?;
    if first < 0x80 {
        return Ok((usize::from(first), offset + 1));
    }

    let num_bytes = usize::from(first & 0x7f);
    if num_bytes == 0 || num_bytes > std::mem::size_of::<usize>() {
        return Err(DerError::BadLength);
    }

    let start = offset + 1;
    let bytes = input
        .get(start..start + num_bytes)
        .ok_or(DerError::Truncated)?;
    let length = bytes
        .iter()
        .fold(0usize, |acc, &b| (acc << 8) | usize::from(b));
    Ok((length, start + num_bytes))
}

/// Strip leading zero bytes, keeping at least one byte.
#[must_use]
pub fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let first_non_zero = bytes.iter().position(|&b| b != 0);
    match first_non_zero {
        Some(index) => &bytes[index..],
        None if bytes.is_empty() => bytes,
        None => &bytes[bytes.len() - 1..],
    }
}

/// Encode a tag-length-value element.
#[must_use]
pub fn tlv(tag: u8, value: &[u8]) -> Vec<u8> {
    let length = encode_length(value.len());
    let mut out = Vec::with_capacity(1 + length.len() + value.len());
    out.push(tag);
    out.extend_from_slice(&length);
    out.extend_from_slice(value);
    out
}

/// Encode big-endian magnitude bytes as a non-negative DER INTEGER.
///
/// Leading zeros are stripped, then one zero byte is prepended when the high bit of the
/// first remaining byte is set so the value is not read back as negative.
#[must_use]
pub fn unsigned_integer(magnitude: &[u8]) -> Vec<u8> {
    let trimmed = trim_leading_zeros(magnitude);
    if trimmed.is_empty() {
        return tlv(TAG_INTEGER, &[0]);
    }

    if trimmed[0] & 0x80 != 0 {
        let mut padded = Vec::with_capacity(trimmed.len() + 1);
        padded.push(0);
        padded.extend_from_slice(trimmed);
        tlv(TAG_INTEGER, &padded)
    } else {
        tlv(TAG_INTEGER, trimmed)
    }
}

/// Wrap already-encoded elements in a SEQUENCE.
#[must_use]
pub fn sequence(elements: &[&[u8]]) -> Vec<u8> {
    let body = elements.concat();
    tlv(TAG_SEQUENCE, &body)
}

/// Read one element with the expected tag at `offset`; returns its content and the
/// offset just past it.
///
/// # Errors
/// Fails on a tag mismatch, a bad length, or content running past the input.
pub fn read_element(input: &[u8], offset: usize, tag: u8) -> Result<(&[u8], usize), DerError> {
    let found = *input.get(offset).ok_or(DerError::Truncated)?;
    if found != tag {
        return Err(DerError::UnexpectedTag {
            expected: tag,
            found,
        });
    }

    let (length, start) = read_length(input, offset + 1)?;
    let end = start.checked_add(length).ok_or(DerError::Overrun)?;
    let content = input.get(start..end).ok_or(DerError::Overrun)?;
    Ok((content, end))
}
