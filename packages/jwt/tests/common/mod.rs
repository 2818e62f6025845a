//! Shared key fixtures, generated once per test binary

#![allow(dead_code)]

use std::sync::OnceLock;

use jwt_engine::{Algorithm, AlgorithmFamily, SigningKey, VerificationKey};
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey};
use rsa::rand_core::OsRng;

pub const SECRET: &str = "a-string-secret-at-least-256-bits-long";

pub struct KeyPair {
    pub private_der: Vec<u8>,
    pub public_der: Vec<u8>,
}

impl KeyPair {
    pub fn signing_key(&self) -> SigningKey {
        SigningKey::private_der(self.private_der.clone())
    }

    pub fn verification_key(&self) -> VerificationKey {
        VerificationKey::public_der(self.public_der.clone())
    }
}

pub fn rsa() -> &'static KeyPair {
    static KEY: OnceLock<KeyPair> = OnceLock::new();
    KEY.get_or_init(|| {
        let private = rsa::RsaPrivateKey::new(&mut OsRng, 2048).expect("rsa key generation");
        let public = rsa::RsaPublicKey::from(&private);
        KeyPair {
            private_der: private.to_pkcs8_der().expect("pkcs8").as_bytes().to_vec(),
            public_der: public.to_public_key_der().expect("spki").as_bytes().to_vec(),
        }
    })
}

pub fn rsa_private() -> rsa::RsaPrivateKey {
    use rsa::pkcs8::DecodePrivateKey;
    rsa::RsaPrivateKey::from_pkcs8_der(&rsa().private_der).expect("pkcs8")
}

pub fn p256() -> &'static KeyPair {
    static KEY: OnceLock<KeyPair> = OnceLock::new();
    KEY.get_or_init(p256_pair)
}

/// A second, unrelated P-256 key
pub fn p256_other() -> &'static KeyPair {
    static KEY: OnceLock<KeyPair> = OnceLock::new();
    KEY.get_or_init(p256_pair)
}

fn p256_pair() -> KeyPair {
    let secret = p256::SecretKey::random(&mut OsRng);
    KeyPair {
        private_der: secret.to_pkcs8_der().expect("pkcs8").as_bytes().to_vec(),
        public_der: secret
            .public_key()
            .to_public_key_der()
            .expect("spki")
            .as_bytes()
            .to_vec(),
    }
}

pub fn p384() -> &'static KeyPair {
    static KEY: OnceLock<KeyPair> = OnceLock::new();
    KEY.get_or_init(|| {
        let secret = p384::SecretKey::random(&mut OsRng);
        KeyPair {
            private_der: secret.to_pkcs8_der().expect("pkcs8").as_bytes().to_vec(),
            public_der: secret
                .public_key()
                .to_public_key_der()
                .expect("spki")
                .as_bytes()
                .to_vec(),
        }
    })
}

pub fn p521() -> &'static KeyPair {
    static KEY: OnceLock<KeyPair> = OnceLock::new();
    KEY.get_or_init(|| {
        let secret = p521::SecretKey::random(&mut OsRng);
        KeyPair {
            private_der: secret.to_pkcs8_der().expect("pkcs8").as_bytes().to_vec(),
            public_der: secret
                .public_key()
                .to_public_key_der()
                .expect("spki")
                .as_bytes()
                .to_vec(),
        }
    })
}

/// Key pair matching an asymmetric algorithm
pub fn pair_for(algorithm: Algorithm) -> &'static KeyPair {
    match algorithm {
        Algorithm::Es256 => p256(),
        Algorithm::Es384 => p384(),
        Algorithm::Es512 => p521(),
        _ => rsa(),
    }
}

pub fn signing_key(algorithm: Algorithm) -> SigningKey {
    match algorithm.family() {
        AlgorithmFamily::Hmac => SigningKey::secret(SECRET),
        _ => pair_for(algorithm).signing_key(),
    }
}

pub fn verification_key(algorithm: Algorithm) -> VerificationKey {
    match algorithm.family() {
        AlgorithmFamily::Hmac => VerificationKey::secret(SECRET),
        _ => pair_for(algorithm).verification_key(),
    }
}

/// Base64url JSON segment
pub fn segment(value: &serde_json::Value) -> String {
    jwt_engine::base64url::encode(serde_json::to_vec(value).expect("json"))
}

/// Replace one segment of a compact token
pub fn replace_segment(token: &str, index: usize, replacement: &str) -> String {
    let mut parts: Vec<&str> = token.split('.').collect();
    parts[index] = replacement;
    parts.join(".")
}
