//! # Verification Pipeline
//!
//! `raw → split → interpret → digest → trust anchors → result`.
//!
//! Parse failures propagate unchanged and no partial result is returned.
//! Only a well-formed, recognised payload reaches the trust decision, and
//! that decision is a plain boolean.

use gpass_core::{compute_digest, interpret, split, CertificateError};
use gpass_crypto::{TrustAnchor, TrustStore};

use crate::result::VerificationResult;

/// Verify one certificate against anchors tried in the given order.
///
/// # Errors
///
/// - [`CertificateError::MalformedInput`] for a missing delimiter, bad
///   base64, or an unreadable payload.
/// - [`CertificateError::UnsupportedSchema`] for an unknown `ct`.
///
/// A signature no anchor accepts is `Ok` with `is_trusted() == false`.
pub fn verify_certificate(
    raw: &[u8],
    anchors: &[TrustAnchor],
) -> Result<VerificationResult, CertificateError> {
    let parts = split(raw)?;
    let (schema, identities) = interpret(parts.payload)?;
    let rule = schema.digest_rule();
    let message = compute_digest(rule, parts.payload)?;

    let trusted = gpass_crypto::verify(&parts.signature, &message, anchors);
    tracing::debug!(
        ct = schema.ct(),
        cert_id = %schema.cert_id(),
        digest_rule = %rule,
        persons = identities.len(),
        trusted,
        "certificate verified"
    );

    Ok(VerificationResult::new(identities, trusted))
}

/// A verifier bound to a loaded trust store.
///
/// Holds only immutable key material; share it by reference or `Arc`
/// across threads.
#[derive(Debug, Clone)]
pub struct CertificateVerifier {
    store: TrustStore,
}

impl CertificateVerifier {
    /// Bind a verifier to `store`.
    pub fn new(store: TrustStore) -> Self {
        Self { store }
    }

    /// See [`verify_certificate`].
    pub fn verify(&self, raw: &[u8]) -> Result<VerificationResult, CertificateError> {
        verify_certificate(raw, self.store.anchors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpass_crypto::testing::TestSigner;

    #[test]
    fn test_verifier_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CertificateVerifier>();
        assert_send_sync::<VerificationResult>();
    }

    #[test]
    fn test_parse_errors_propagate_before_trust_check() {
        let verifier = CertificateVerifier::new(TrustStore::new(vec![TestSigner::ec().anchor("ec")]));
        assert!(verifier.verify(b"no-delimiter-here").unwrap_err().is_malformed());
        assert!(verifier
            .verify(br#"c2ln#{"ct":9}"#)
            .unwrap_err()
            .is_unsupported_schema());
    }
}
