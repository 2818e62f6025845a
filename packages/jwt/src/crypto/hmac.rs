//! HMAC-SHA digests (HS256, HS384, HS512)

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

use crate::algorithms::DigestAlgorithm;
use crate::error::{JwtError, JwtResult};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

#[inline]
pub(super) fn mac(digest: DigestAlgorithm, secret: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    match digest {
        DigestAlgorithm::Sha256 => compute::<HmacSha256>(secret, message),
        DigestAlgorithm::Sha384 => compute::<HmacSha384>(secret, message),
        DigestAlgorithm::Sha512 => compute::<HmacSha512>(secret, message),
    }
}

fn compute<M: Mac + KeyInit>(secret: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = <M as KeyInit>::new_from_slice(secret)
        .map_err(|_| JwtError::invalid_key("Invalid HMAC key"))?;
    Mac::update(&mut mac, message);
    Ok(mac.finalize().into_bytes().to_vec())
}
