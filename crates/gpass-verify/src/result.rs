//! # Verification Result
//!
//! The value handed to the presentation layer: who the certificate covers
//! and whether its signature is trusted. Built once per call, never mutated.

use gpass_core::IdentityRecord;
use serde::Serialize;

/// Outcome of verifying one certificate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationResult {
    identities: Vec<IdentityRecord>,
    trusted: bool,
}

impl VerificationResult {
    pub(crate) fn new(identities: Vec<IdentityRecord>, trusted: bool) -> Self {
        Self {
            identities,
            trusted,
        }
    }

    /// Identity records in payload order.
    pub fn identities(&self) -> &[IdentityRecord] {
        &self.identities
    }

    /// True if some trust anchor accepted the signature.
    pub fn is_trusted(&self) -> bool {
        self.trusted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_for_presentation() {
        let result = VerificationResult::new(
            vec![IdentityRecord {
                id_num: "123456789".into(),
                valid_by: "2023-01-01".into(),
                cert_id: "X1".into(),
            }],
            false,
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "identities": [
                    {"id_num": "123456789", "valid_by": "2023-01-01", "cert_id": "X1"}
                ],
                "trusted": false
            })
        );
    }
}
