//! JSON Web Key to SubjectPublicKeyInfo conversion
//!
//! Resolvers may hand back a JWK instead of an encoded key. RSA keys (`n`, `e`) and
//! EC keys (`crv`, `x`, `y`) are re-encoded as SPKI DER so the signature provider
//! only ever sees one public key format.

use serde::{Deserialize, Serialize};

use crate::base64url;
use crate::der::{self, TAG_BIT_STRING};
use crate::error::{JwtError, JwtResult};
use crate::keys::PublicKey;

const OID_RSA_ENCRYPTION: [u8; 11] = [
    0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x01,
];
const DER_NULL: [u8; 2] = [0x05, 0x00];
const OID_EC_PUBLIC_KEY: [u8; 9] = [0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01];
const OID_P256: [u8; 10] = [0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07];
const OID_P384: [u8; 7] = [0x06, 0x05, 0x2b, 0x81, 0x04, 0x00, 0x22];
const OID_P521: [u8; 7] = [0x06, 0x05, 0x2b, 0x81, 0x04, 0x00, 0x23];

/// Uncompressed SEC1 point marker
const SEC1_UNCOMPRESSED: u8 = 0x04;

/// Public JSON Web Key (RFC 7517)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    /// Key type: `RSA` or `EC`
    pub kty: String,
    /// Key identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
    /// Intended algorithm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    /// Public key use (`sig`)
    #[serde(default, rename = "use", skip_serializing_if = "Option::is_none")]
    pub key_use: Option<String>,
    /// RSA modulus, base64url
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<String>,
    /// RSA public exponent, base64url
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub e: Option<String>,
    /// EC curve name: `P-256`, `P-384` or `P-521`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crv: Option<String>,
    /// EC x coordinate, base64url
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    /// EC y coordinate, base64url
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
}

impl Jwk {
    /// RSA JWK from base64url modulus and exponent
    #[must_use]
    pub fn rsa(n: impl Into<String>, e: impl Into<String>) -> Self {
        Self {
            kty: "RSA".to_string(),
            n: Some(n.into()),
            e: Some(e.into()),
            ..Self::default()
        }
    }

    /// EC JWK from curve name and base64url coordinates
    #[must_use]
    pub fn ec(crv: impl Into<String>, x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            kty: "EC".to_string(),
            crv: Some(crv.into()),
            x: Some(x.into()),
            y: Some(y.into()),
            ..Self::default()
        }
    }

    /// Convert to an SPKI public key.
    ///
    /// # Errors
    /// Returns [`JwtError::InvalidKey`] for unknown key types or curves and missing or
    /// empty members, and a base64url error for undecodable members.
    pub fn to_public_key(&self) -> JwtResult<PublicKey> {
        let der = match self.kty.as_str() {
            "RSA" => {
                let n = member(self.n.as_deref(), "n")?;
                let e = member(self.e.as_deref(), "e")?;
                rsa_spki(&n, &e)
            }
            "EC" => {
                let crv = self.crv.as_deref().ok_or_else(|| missing("crv"))?;
                let x = member(self.x.as_deref(), "x")?;
                let y = member(self.y.as_deref(), "y")?;
                ec_spki(crv, &x, &y)?
            }
            other => {
                return Err(JwtError::InvalidKey(format!(
                    "Unsupported JWK key type {other}"
                )));
            }
        };
        Ok(PublicKey::from_public_key_der(der))
    }
}

/// SPKI DER for an RSA public key given base64url modulus and exponent.
///
/// Returns `None` if either value is empty or not valid base64url.
#[must_use]
pub fn rsa_public_key_der(n: &str, e: &str) -> Option<Vec<u8>> {
    let n = base64url::decode(n).ok().filter(|n| !n.is_empty())?;
    let e = base64url::decode(e).ok().filter(|e| !e.is_empty())?;
    Some(rsa_spki(&n, &e))
}

fn missing(name: &str) -> JwtError {
    JwtError::InvalidKey(format!("JWK is missing \"{name}\""))
}

/// Decoded bytes of a base64url member; absent and empty are both missing.
fn member(value: Option<&str>, name: &str) -> JwtResult<Vec<u8>> {
    let bytes = base64url::decode(value.ok_or_else(|| missing(name))?)?;
    if bytes.is_empty() {
        return Err(missing(name));
    }
    Ok(bytes)
}

fn rsa_spki(modulus: &[u8], exponent: &[u8]) -> Vec<u8> {
    let rsa_public_key = der::sequence(&[
        &der::unsigned_integer(modulus),
        &der::unsigned_integer(exponent),
    ]);
    let algorithm = der::sequence(&[&OID_RSA_ENCRYPTION, &DER_NULL]);
    der::sequence(&[&algorithm, &bit_string(&rsa_public_key)])
}

fn ec_spki(crv: &str, x: &[u8], y: &[u8]) -> JwtResult<Vec<u8>> {
    let (curve_oid, coordinate_len): (&[u8], usize) = match crv {
        "P-256" => (&OID_P256, 32),
        "P-384" => (&OID_P384, 48),
        "P-521" => (&OID_P521, 66),
        other => return Err(JwtError::InvalidKey(format!("Unsupported JWK curve {other}"))),
    };

    let mut point = Vec::with_capacity(1 + 2 * coordinate_len);
    point.push(SEC1_UNCOMPRESSED);
    push_coordinate(&mut point, x, coordinate_len)?;
    push_coordinate(&mut point, y, coordinate_len)?;

    let algorithm = der::sequence(&[&OID_EC_PUBLIC_KEY, curve_oid]);
    Ok(der::sequence(&[&algorithm, &bit_string(&point)]))
}

fn push_coordinate(point: &mut Vec<u8>, coordinate: &[u8], len: usize) -> JwtResult<()> {
    let coordinate = der::trim_leading_zeros(coordinate);
    if coordinate.len() > len {
        return Err(JwtError::invalid_key("JWK coordinate is longer than the curve allows"));
    }
    point.resize(point.len() + len - coordinate.len(), 0);
    point.extend_from_slice(coordinate);
    Ok(())
}

/// BIT STRING with zero unused bits
fn bit_string(content: &[u8]) -> Vec<u8> {
    let mut value = Vec::with_capacity(content.len() + 1);
    value.push(0x00);
    value.extend_from_slice(content);
    der::tlv(TAG_BIT_STRING, &value)
}
