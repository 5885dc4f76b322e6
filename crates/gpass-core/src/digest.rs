//! # Digest Rules
//!
//! The two certificate layouts were signed by different issuers using
//! different conventions, and the verifier has to reproduce each exactly:
//!
//! - **Batch (`ct == 1`)**: the signed message is the payload text itself.
//! - **Single (`ct == 2`)**: the signed message is `SHA-256(payload)`.
//!
//! In both cases the signature scheme then applies its own SHA-256 to the
//! message, so a single certificate is effectively signed over
//! `SHA-256(SHA-256(payload))`. Applying the wrong rule does not crash; it
//! makes every signature fail to verify.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::MalformedInput;

/// Which message bytes a certificate's signature covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestRule {
    /// The payload text, re-encoded as UTF-8. Not hashed here.
    RawPayload,
    /// The 32-byte SHA-256 of the payload bytes.
    Sha256Payload,
}

impl DigestRule {
    /// Short identifier used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RawPayload => "raw-payload",
            Self::Sha256Payload => "sha256-payload",
        }
    }
}

impl std::fmt::Display for DigestRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compute the message bytes the signature is checked against.
///
/// # Errors
///
/// [`MalformedInput::PayloadEncoding`] if `RawPayload` is requested for bytes
/// that are not UTF-8 text.
pub fn compute_digest(rule: DigestRule, payload: &[u8]) -> Result<Vec<u8>, MalformedInput> {
    match rule {
        DigestRule::RawPayload => {
            let text = std::str::from_utf8(payload)?;
            Ok(text.as_bytes().to_vec())
        }
        DigestRule::Sha256Payload => Ok(Sha256::digest(payload).to_vec()),
    }
}
