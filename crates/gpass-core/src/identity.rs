//! # Identity Records
//!
//! One `IdentityRecord` per person covered by a certificate. Issuers are not
//! consistent about whether identity numbers and certificate ids are JSON
//! strings or numbers, so each field keeps the scalar exactly as it arrived.
//! The validity end (`e`) is passed through as whatever JSON value the issuer
//! wrote, `null` and objects included.

use serde::{Deserialize, Serialize};

/// A JSON scalar carried through from the payload without coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A JSON string.
    Text(String),
    /// A JSON number, kept in serde_json's lossless representation.
    Number(serde_json::Number),
}

impl FieldValue {
    /// Borrow the value as a string slice, if it is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// The identity fields extracted for one person on a certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// National identity number (`idl`).
    pub id_num: FieldValue,
    /// End of validity (`e`), any JSON value, as issued.
    pub valid_by: serde_json::Value,
    /// Certificate identifier (`id`). Shared by every record of a batch.
    pub cert_id: FieldValue,
}
