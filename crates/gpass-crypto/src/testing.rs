//! Test-only signing helpers.
//!
//! Production code never holds private keys; these helpers let tests play
//! the issuer's role with freshly generated keys. Enabled for this crate's
//! own unit tests and, via the `test-utils` feature, for downstream tests.

use p256::pkcs8::{EncodePublicKey as _, LineEnding};
use rsa::pkcs1::EncodeRsaPublicKey as _;
use rsa::{RsaPrivateKey, RsaPublicKey};
use sha2::{Digest as _, Sha256};

use crate::anchor::TrustAnchor;

/// Test RSA modulus size. Small keeps key generation fast in debug builds.
pub const TEST_RSA_BITS: usize = 1024;

/// A private key able to sign the way a certificate issuer does.
pub enum TestSigner {
    /// RSA key signing with PKCS#1 v1.5 / SHA-256.
    Rsa(RsaPrivateKey),
    /// P-256 key signing with ECDSA / SHA-256, DER-encoded.
    Ec(p256::ecdsa::SigningKey),
    /// P-384 key signing with ECDSA over a SHA-256 digest, DER-encoded.
    EcP384(p384::ecdsa::SigningKey),
}

impl TestSigner {
    /// Generate a fresh RSA signer.
    pub fn rsa() -> Self {
        let key = RsaPrivateKey::new(&mut rand::thread_rng(), TEST_RSA_BITS)
            .expect("RSA key generation");
        Self::Rsa(key)
    }

    /// Generate a fresh P-256 signer.
    pub fn ec() -> Self {
        Self::Ec(p256::ecdsa::SigningKey::random(&mut rand::rngs::OsRng))
    }

    /// Generate a fresh P-384 signer.
    pub fn ec_p384() -> Self {
        Self::EcP384(p384::ecdsa::SigningKey::random(&mut rand::rngs::OsRng))
    }

    /// Sign `message`, returning the wire-format signature bytes.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        match self {
            Self::Rsa(key) => {
                use rsa::signature::{SignatureEncoding as _, Signer as _};
                let signing_key = rsa::pkcs1v15::SigningKey::<Sha256>::new(key.clone());
                signing_key.sign(message).to_vec()
            }
            Self::Ec(key) => {
                use p256::ecdsa::signature::Signer as _;
                let sig: p256::ecdsa::Signature = key.sign(message);
                sig.to_der().as_bytes().to_vec()
            }
            Self::EcP384(key) => {
                use p384::ecdsa::signature::hazmat::PrehashSigner as _;
                let sig: p384::ecdsa::Signature = key
                    .sign_prehash(&Sha256::digest(message))
                    .expect("P-384 prehash signing");
                sig.to_der().as_bytes().to_vec()
            }
        }
    }

    /// The matching trust anchor.
    pub fn anchor(&self, name: &str) -> TrustAnchor {
        match self {
            Self::Rsa(key) => TrustAnchor::rsa_pkcs1v15_sha256(name, RsaPublicKey::from(key)),
            Self::Ec(key) => TrustAnchor::ecdsa_p256_sha256(name, p256::ecdsa::VerifyingKey::from(key)),
            Self::EcP384(key) => {
                TrustAnchor::ecdsa_p384_sha256(name, p384::ecdsa::VerifyingKey::from(key))
            }
        }
    }

    /// Public key as a PEM SubjectPublicKeyInfo block.
    pub fn public_pem(&self) -> String {
        match self {
            Self::Rsa(key) => RsaPublicKey::from(key)
                .to_public_key_pem(LineEnding::LF)
                .expect("RSA SPKI encoding"),
            Self::Ec(key) => p256::ecdsa::VerifyingKey::from(key)
                .to_public_key_pem(LineEnding::LF)
                .expect("P-256 SPKI encoding"),
            Self::EcP384(key) => p384::ecdsa::VerifyingKey::from(key)
                .to_public_key_pem(LineEnding::LF)
                .expect("P-384 SPKI encoding"),
        }
    }

    /// RSA public key as a PKCS#1 PEM block.
    ///
    /// # Panics
    ///
    /// Panics for EC signers, which have no PKCS#1 form.
    pub fn pkcs1_pem(&self) -> String {
        match self {
            Self::Rsa(key) => RsaPublicKey::from(key)
                .to_pkcs1_pem(LineEnding::LF)
                .expect("RSA PKCS#1 encoding"),
            Self::Ec(_) | Self::EcP384(_) => panic!("EC keys have no PKCS#1 encoding"),
        }
    }
}
