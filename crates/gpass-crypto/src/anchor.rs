//! # Trust Anchors
//!
//! A trust anchor pairs a public key with the exact signature scheme its
//! holder signs with. Two schemes are supported:
//!
//! - **RSA PKCS#1 v1.5 with SHA-256** (`rsa-pkcs1v15-sha256`).
//! - **ECDSA with SHA-256** (`ecdsa-sha256`) on P-256 or P-384. The curve
//!   comes from the key itself; the message digest is SHA-256 on both.
//!
//! Both schemes hash the message themselves; callers pass the message bytes
//! produced by the certificate's digest rule, never a pre-hashed value meant
//! to skip that step.
//!
//! ## Key Formats
//!
//! - RSA: PEM SubjectPublicKeyInfo (`BEGIN PUBLIC KEY`) or PKCS#1
//!   (`BEGIN RSA PUBLIC KEY`).
//! - EC: PEM SubjectPublicKeyInfo on P-256 or P-384.

use p256::pkcs8::DecodePublicKey as _;
use rsa::pkcs1::DecodeRsaPublicKey as _;
use rsa::RsaPublicKey;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

use crate::error::{AnchorRejection, TrustStoreError};

/// Signature scheme an anchor verifies with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorAlgorithm {
    /// RSASSA-PKCS1-v1_5 over SHA-256.
    RsaPkcs1v15Sha256,
    /// ECDSA over NIST P-256 or P-384 with SHA-256.
    #[serde(alias = "ecdsa-p256-sha256")]
    EcdsaSha256,
}

impl AnchorAlgorithm {
    /// The identifier used in trust-store descriptors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RsaPkcs1v15Sha256 => "rsa-pkcs1v15-sha256",
            Self::EcdsaSha256 => "ecdsa-sha256",
        }
    }
}

impl std::fmt::Display for AnchorAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone)]
enum AnchorKey {
    Rsa(RsaPublicKey),
    EcdsaP256(p256::ecdsa::VerifyingKey),
    EcdsaP384(p384::ecdsa::VerifyingKey),
}

/// A named public key bound to one signature scheme. Immutable once built.
#[derive(Clone)]
pub struct TrustAnchor {
    name: String,
    key: AnchorKey,
}

impl TrustAnchor {
    /// Anchor for an RSA key verifying PKCS#1 v1.5 / SHA-256 signatures.
    pub fn rsa_pkcs1v15_sha256(name: impl Into<String>, key: RsaPublicKey) -> Self {
        Self {
            name: name.into(),
            key: AnchorKey::Rsa(key),
        }
    }

    /// Anchor for a P-256 key verifying ECDSA / SHA-256 signatures.
    pub fn ecdsa_p256_sha256(name: impl Into<String>, key: p256::ecdsa::VerifyingKey) -> Self {
        Self {
            name: name.into(),
            key: AnchorKey::EcdsaP256(key),
        }
    }

    /// Anchor for a P-384 key verifying ECDSA signatures over a SHA-256
    /// digest.
    pub fn ecdsa_p384_sha256(name: impl Into<String>, key: p384::ecdsa::VerifyingKey) -> Self {
        Self {
            name: name.into(),
            key: AnchorKey::EcdsaP384(key),
        }
    }

    /// Parse a PEM public key for the given scheme.
    ///
    /// # Errors
    ///
    /// [`TrustStoreError::InvalidKey`] if the PEM does not hold a key of the
    /// type `algorithm` requires (an EC key offered as RSA, an EC key on a
    /// curve other than P-256 or P-384, or a corrupt block).
    pub fn from_pem(
        name: impl Into<String>,
        algorithm: AnchorAlgorithm,
        pem: &str,
    ) -> Result<Self, TrustStoreError> {
        let name = name.into();
        let pem = pem.trim();
        match algorithm {
            AnchorAlgorithm::RsaPkcs1v15Sha256 => {
                let key = RsaPublicKey::from_public_key_pem(pem)
                    .or_else(|spki_err| {
                        RsaPublicKey::from_pkcs1_pem(pem).map_err(|pkcs1_err| {
                            format!("not an RSA SPKI ({spki_err}) or PKCS#1 ({pkcs1_err}) key")
                        })
                    })
                    .map_err(|reason| TrustStoreError::InvalidKey {
                        name: name.clone(),
                        reason,
                    })?;
                Ok(Self::rsa_pkcs1v15_sha256(name, key))
            }
            AnchorAlgorithm::EcdsaSha256 => {
                if let Ok(key) = p256::ecdsa::VerifyingKey::from_public_key_pem(pem) {
                    return Ok(Self::ecdsa_p256_sha256(name, key));
                }
                let key = p384::ecdsa::VerifyingKey::from_public_key_pem(pem).map_err(|e| {
                    TrustStoreError::InvalidKey {
                        name: name.clone(),
                        reason: format!("not a P-256 or P-384 SPKI key: {e}"),
                    }
                })?;
                Ok(Self::ecdsa_p384_sha256(name, key))
            }
        }
    }

    /// Anchor name, for logs and diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The scheme this anchor verifies with.
    pub fn algorithm(&self) -> AnchorAlgorithm {
        match self.key {
            AnchorKey::Rsa(_) => AnchorAlgorithm::RsaPkcs1v15Sha256,
            AnchorKey::EcdsaP256(_) | AnchorKey::EcdsaP384(_) => AnchorAlgorithm::EcdsaSha256,
        }
    }

    /// Check `signature` over `message` with this anchor's key and scheme.
    ///
    /// ECDSA signatures are accepted as ASN.1 DER or as fixed-width `r || s`.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), AnchorRejection> {
        match &self.key {
            AnchorKey::Rsa(key) => {
                use rsa::signature::Verifier as _;
                let sig = rsa::pkcs1v15::Signature::try_from(signature)
                    .map_err(|e| AnchorRejection::SignatureFormat(e.to_string()))?;
                rsa::pkcs1v15::VerifyingKey::<Sha256>::new(key.clone())
                    .verify(message, &sig)
                    .map_err(|e| AnchorRejection::Mismatch(e.to_string()))
            }
            AnchorKey::EcdsaP256(key) => {
                use p256::ecdsa::signature::Verifier as _;
                let sig = p256::ecdsa::Signature::from_der(signature)
                    .or_else(|_| p256::ecdsa::Signature::from_slice(signature))
                    .map_err(|e| AnchorRejection::SignatureFormat(e.to_string()))?;
                key.verify(message, &sig)
                    .map_err(|e| AnchorRejection::Mismatch(e.to_string()))
            }
            AnchorKey::EcdsaP384(key) => {
                // SHA-256 on every curve, not P-384's default SHA-384.
                use p384::ecdsa::signature::hazmat::PrehashVerifier as _;
                let sig = p384::ecdsa::Signature::from_der(signature)
                    .or_else(|_| p384::ecdsa::Signature::from_slice(signature))
                    .map_err(|e| AnchorRejection::SignatureFormat(e.to_string()))?;
                key.verify_prehash(&Sha256::digest(message), &sig)
                    .map_err(|e| AnchorRejection::Mismatch(e.to_string()))
            }
        }
    }
}

impl std::fmt::Debug for TrustAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustAnchor")
            .field("name", &self.name)
            .field("algorithm", &self.algorithm())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestSigner;

    #[test]
    fn test_algorithm_serde_names() {
        let yaml = serde_yaml::to_string(&AnchorAlgorithm::RsaPkcs1v15Sha256).unwrap();
        assert_eq!(yaml.trim(), "rsa-pkcs1v15-sha256");
        let alg: AnchorAlgorithm = serde_yaml::from_str("ecdsa-sha256").unwrap();
        assert_eq!(alg, AnchorAlgorithm::EcdsaSha256);
        assert_eq!(alg.to_string(), "ecdsa-sha256");
        let legacy: AnchorAlgorithm = serde_yaml::from_str("ecdsa-p256-sha256").unwrap();
        assert_eq!(legacy, AnchorAlgorithm::EcdsaSha256);
    }

    #[test]
    fn test_ec_sign_and_verify() {
        let signer = TestSigner::ec();
        let anchor = signer.anchor("ec");
        assert_eq!(anchor.algorithm(), AnchorAlgorithm::EcdsaSha256);
        let sig = signer.sign(b"hello");
        anchor.verify(b"hello", &sig).expect("valid signature should verify");
    }

    #[test]
    fn test_ec_accepts_fixed_width_signature() {
        use p256::ecdsa::signature::Signer as _;
        let signer = TestSigner::ec();
        let TestSigner::Ec(sk) = &signer else { unreachable!() };
        let sig: p256::ecdsa::Signature = sk.sign(b"hello");
        let fixed = sig.to_bytes().to_vec();
        assert_eq!(fixed.len(), 64);
        signer.anchor("ec").verify(b"hello", &fixed).unwrap();
    }

    #[test]
    fn test_ec_wrong_message_is_mismatch() {
        let signer = TestSigner::ec();
        let sig = signer.sign(b"original");
        let err = signer.anchor("ec").verify(b"tampered", &sig).unwrap_err();
        assert!(matches!(err, AnchorRejection::Mismatch(_)));
    }

    #[test]
    fn test_ec_garbage_signature_is_format_error() {
        let err = TestSigner::ec()
            .anchor("ec")
            .verify(b"msg", b"signaturebytes")
            .unwrap_err();
        assert!(matches!(err, AnchorRejection::SignatureFormat(_)));
    }

    #[test]
    fn test_rsa_sign_and_verify() {
        let signer = TestSigner::rsa();
        let anchor = signer.anchor("rsa");
        assert_eq!(anchor.algorithm(), AnchorAlgorithm::RsaPkcs1v15Sha256);
        let sig = signer.sign(b"hello");
        anchor.verify(b"hello", &sig).unwrap();
        assert!(anchor.verify(b"hellO", &sig).is_err());
    }

    #[test]
    fn test_rsa_from_spki_and_pkcs1_pem() {
        let signer = TestSigner::rsa();
        let sig = signer.sign(b"pem");
        for pem in [signer.public_pem(), signer.pkcs1_pem()] {
            let anchor =
                TrustAnchor::from_pem("rsa", AnchorAlgorithm::RsaPkcs1v15Sha256, &pem).unwrap();
            anchor.verify(b"pem", &sig).unwrap();
        }
    }

    #[test]
    fn test_ec_from_pem() {
        let signer = TestSigner::ec();
        let anchor =
            TrustAnchor::from_pem("ec", AnchorAlgorithm::EcdsaSha256, &signer.public_pem())
                .unwrap();
        anchor.verify(b"pem", &signer.sign(b"pem")).unwrap();
    }

    #[test]
    fn test_p384_sign_and_verify() {
        let signer = TestSigner::ec_p384();
        let anchor = signer.anchor("p384");
        assert_eq!(anchor.algorithm(), AnchorAlgorithm::EcdsaSha256);
        let sig = signer.sign(b"hello");
        anchor.verify(b"hello", &sig).unwrap();
        assert!(matches!(
            anchor.verify(b"hellO", &sig).unwrap_err(),
            AnchorRejection::Mismatch(_)
        ));
    }

    #[test]
    fn test_p384_from_pem_selects_curve_from_key() {
        let signer = TestSigner::ec_p384();
        let anchor =
            TrustAnchor::from_pem("p384", AnchorAlgorithm::EcdsaSha256, &signer.public_pem())
                .unwrap();
        anchor.verify(b"pem", &signer.sign(b"pem")).unwrap();
    }

    #[test]
    fn test_p384_signature_checks_sha256_digest() {
        use p384::ecdsa::signature::Signer as _;
        let signer = TestSigner::ec_p384();
        let TestSigner::EcP384(sk) = &signer else { unreachable!() };
        // A SHA-384 signature over the same message is a different scheme.
        let sha384_sig: p384::ecdsa::Signature = sk.sign(b"hello");
        let err = signer
            .anchor("p384")
            .verify(b"hello", &sha384_sig.to_bytes())
            .unwrap_err();
        assert!(matches!(err, AnchorRejection::Mismatch(_)));
    }

    #[test]
    fn test_cross_curve_signature_is_rejected() {
        let p256 = TestSigner::ec();
        let p384 = TestSigner::ec_p384();
        assert!(p384.anchor("p384").verify(b"msg", &p256.sign(b"msg")).is_err());
        assert!(p256.anchor("p256").verify(b"msg", &p384.sign(b"msg")).is_err());
    }

    #[test]
    fn test_from_pem_rejects_key_type_mismatch() {
        let ec_pem = TestSigner::ec().public_pem();
        let err = TrustAnchor::from_pem("x", AnchorAlgorithm::RsaPkcs1v15Sha256, &ec_pem)
            .unwrap_err();
        assert!(matches!(err, TrustStoreError::InvalidKey { ref name, .. } if name == "x"));

        let rsa_pem = TestSigner::rsa().public_pem();
        assert!(TrustAnchor::from_pem("y", AnchorAlgorithm::EcdsaSha256, &rsa_pem).is_err());
    }

    #[test]
    fn test_from_pem_rejects_garbage() {
        let err = TrustAnchor::from_pem("z", AnchorAlgorithm::EcdsaSha256, "not a pem")
            .unwrap_err();
        assert!(err.to_string().starts_with("invalid key for anchor 'z'"));
    }

    #[test]
    fn test_debug_shows_name_and_algorithm_only() {
        let debug = format!("{:?}", TestSigner::ec().anchor("il-nb-dsc-01"));
        assert_eq!(
            debug,
            "TrustAnchor { name: \"il-nb-dsc-01\", algorithm: EcdsaSha256 }"
        );
    }
}
