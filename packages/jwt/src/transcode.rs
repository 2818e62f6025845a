//! ECDSA signature transcoding between ASN.1 DER and JOSE raw R||S
//!
//! Signature providers produce and consume `SEQUENCE { INTEGER r, INTEGER s }`; the
//! JWS wire format carries R and S as fixed-width big-endian halves whose width
//! depends on the curve.

use thiserror::Error;

use crate::algorithms::Algorithm;
use crate::der::{self, DerError, TAG_INTEGER, TAG_SEQUENCE};

/// Transcoding failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscodeError {
    /// Algorithm is not an ECDSA algorithm
    #[error("Unsupported ECDSA algorithm {0}")]
    UnsupportedAlgorithm(Algorithm),

    /// Raw signature is not exactly two components wide
    #[error("Invalid JOSE signature length: expected {expected} bytes, got {actual}")]
    InvalidJoseLength {
        /// Required length, `2 * component length`
        expected: usize,
        /// Length received
        actual: usize,
    },

    /// DER structure could not be parsed
    #[error("Invalid DER signature ({context}): {source}")]
    InvalidDer {
        /// Which part of the signature was being read
        context: &'static str,
        /// Underlying DER failure
        source: DerError,
    },

    /// R or S does not fit the curve's component length
    #[error("Invalid DER signature (r/s length): {actual} bytes exceeds {max}")]
    ComponentTooLarge {
        /// Component length for the algorithm
        max: usize,
        /// Significant length found
        actual: usize,
    },
}

/// Byte length of each of R and S for an ECDSA algorithm.
///
/// # Errors
/// Returns [`TranscodeError::UnsupportedAlgorithm`] for non-ECDSA algorithms.
pub fn component_len(algorithm: Algorithm) -> Result<usize, TranscodeError> {
    algorithm
        .spec()
        .component_len
        .ok_or(TranscodeError::UnsupportedAlgorithm(algorithm))
}

/// Convert a JOSE raw signature (R||S) into DER.
///
/// # Errors
/// Fails for non-ECDSA algorithms and when `raw` is not exactly `2 * component_len`.
pub fn jose_to_der(raw: &[u8], algorithm: Algorithm) -> Result<Vec<u8>, TranscodeError> {
    let part_len = component_len(algorithm)?;
    let expected = part_len * 2;
    if raw.len() != expected {
        return Err(TranscodeError::InvalidJoseLength {
            expected,
            actual: raw.len(),
        });
    }

    let (r, s) = raw.split_at(part_len);
    let r = der::unsigned_integer(r);
    let s = der::unsigned_integer(s);
    Ok(der::sequence(&[&r, &s]))
}

/// Convert a DER ECDSA signature into JOSE raw form (R||S, each left-padded).
///
/// # Errors
/// Fails for non-ECDSA algorithms, malformed DER, and components wider than the
/// curve allows.
pub fn der_to_jose(der_signature: &[u8], algorithm: Algorithm) -> Result<Vec<u8>, TranscodeError> {
    let part_len = component_len(algorithm)?;

    let (body, _) = der::read_element(der_signature, 0, TAG_SEQUENCE).map_err(|source| {
        TranscodeError::InvalidDer {
            context: "expected SEQUENCE",
            source,
        }
    })?;

    let (r, offset) =
        der::read_element(body, 0, TAG_INTEGER).map_err(|source| TranscodeError::InvalidDer {
            context: "missing r",
            source,
        })?;
    let (s, _) = der::read_element(body, offset, TAG_INTEGER).map_err(|source| {
        TranscodeError::InvalidDer {
            context: "missing s",
            source,
        }
    })?;

    let mut raw = Vec::with_capacity(part_len * 2);
    left_pad_into(&mut raw, r, part_len)?;
    left_pad_into(&mut raw, s, part_len)?;
    Ok(raw)
}

fn left_pad_into(out: &mut Vec<u8>, integer: &[u8], part_len: usize) -> Result<(), TranscodeError> {
    let trimmed = der::trim_leading_zeros(integer);
    if trimmed.len() > part_len {
        return Err(TranscodeError::ComponentTooLarge {
            max: part_len,
            actual: trimmed.len(),
        });
    }

    out.resize(out.len() + part_len - trimmed.len(), 0);
    out.extend_from_slice(trimmed);
    Ok(())
}
