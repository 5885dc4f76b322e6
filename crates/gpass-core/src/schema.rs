//! # Certificate Schema
//!
//! The payload's `ct` field selects one of two layouts:
//!
//! | `ct` | Variant  | Layout                                        |
//! |------|----------|-----------------------------------------------|
//! | 1    | `Batch`  | `{"id", "p": [{"idl", "e"}, ...]}`            |
//! | 2    | `Single` | `{"id", "idl", "e"}`                          |
//!
//! The discriminant is read first; the variant body is then deserialized
//! into its own struct. Unknown extra fields are ignored. Every consumer
//! matches on [`CertificateSchema`] exhaustively, so a third layout cannot
//! be added without each call site deciding how to handle it.

use serde::Deserialize;
use serde_json::Value;

use crate::digest::DigestRule;
use crate::error::{CertificateError, MalformedInput};
use crate::identity::{FieldValue, IdentityRecord};

/// One person entry inside a batch certificate's `p` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PersonEntry {
    /// Identity number.
    #[serde(rename = "idl")]
    pub id_num: FieldValue,
    /// Validity end, any JSON value.
    #[serde(rename = "e")]
    pub valid_by: Value,
}

/// `ct == 1`: one certificate id covering several people.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BatchCertificate {
    /// Certificate identifier shared by every person.
    #[serde(rename = "id")]
    pub cert_id: FieldValue,
    /// People covered, in issuer order.
    #[serde(rename = "p")]
    pub persons: Vec<PersonEntry>,
}

/// `ct == 2`: one person, fields at top level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SingleCertificate {
    /// Certificate identifier.
    #[serde(rename = "id")]
    pub cert_id: FieldValue,
    /// Identity number.
    #[serde(rename = "idl")]
    pub id_num: FieldValue,
    /// Validity end, any JSON value.
    #[serde(rename = "e")]
    pub valid_by: Value,
}

/// A parsed certificate payload, tagged by its `ct` discriminant.
#[derive(Debug, Clone, PartialEq)]
pub enum CertificateSchema {
    /// `ct == 1`.
    Batch(BatchCertificate),
    /// `ct == 2`.
    Single(SingleCertificate),
}

impl CertificateSchema {
    /// Discriminant value for the batch layout.
    pub const BATCH_CT: u64 = 1;
    /// Discriminant value for the single layout.
    pub const SINGLE_CT: u64 = 2;

    /// The `ct` value this variant was parsed from.
    pub fn ct(&self) -> u64 {
        match self {
            Self::Batch(_) => Self::BATCH_CT,
            Self::Single(_) => Self::SINGLE_CT,
        }
    }

    /// The digest rule the issuer of this layout signs with.
    pub fn digest_rule(&self) -> DigestRule {
        match self {
            Self::Batch(_) => DigestRule::RawPayload,
            Self::Single(_) => DigestRule::Sha256Payload,
        }
    }

    /// The certificate identifier.
    pub fn cert_id(&self) -> &FieldValue {
        match self {
            Self::Batch(b) => &b.cert_id,
            Self::Single(s) => &s.cert_id,
        }
    }

    /// Identity records in payload order. A batch repeats its certificate id
    /// on every record.
    pub fn identities(&self) -> Vec<IdentityRecord> {
        match self {
            Self::Batch(b) => b
                .persons
                .iter()
                .map(|p| IdentityRecord {
                    id_num: p.id_num.clone(),
                    valid_by: p.valid_by.clone(),
                    cert_id: b.cert_id.clone(),
                })
                .collect(),
            Self::Single(s) => vec![IdentityRecord {
                id_num: s.id_num.clone(),
                valid_by: s.valid_by.clone(),
                cert_id: s.cert_id.clone(),
            }],
        }
    }
}

/// Parse a certificate payload and extract its identity records.
///
/// # Errors
///
/// - [`MalformedInput::PayloadSyntax`] if the payload is not JSON.
/// - [`MalformedInput::MissingDiscriminant`] if there is no `ct` field.
/// - [`CertificateError::UnsupportedSchema`] if `ct` is not 1 or 2.
/// - [`MalformedInput::InvalidField`] if the selected layout is incomplete.
pub fn interpret(
    payload: &[u8],
) -> Result<(CertificateSchema, Vec<IdentityRecord>), CertificateError> {
    let value: Value = serde_json::from_slice(payload).map_err(MalformedInput::from)?;
    let ct = value.get("ct").ok_or(MalformedInput::MissingDiscriminant)?;

    let schema = match layout_number(ct) {
        Some(CertificateSchema::BATCH_CT) => CertificateSchema::Batch(
            BatchCertificate::deserialize(&value).map_err(|e| invalid_field(1, e))?,
        ),
        Some(CertificateSchema::SINGLE_CT) => CertificateSchema::Single(
            SingleCertificate::deserialize(&value).map_err(|e| invalid_field(2, e))?,
        ),
        _ => {
            return Err(CertificateError::UnsupportedSchema { ct: ct.to_string() });
        }
    };

    let identities = schema.identities();
    Ok((schema, identities))
}

/// `ct` as a layout number. `2` and `2.0` are the same JSON number; strings,
/// booleans and `null` are not numbers at all.
fn layout_number(ct: &Value) -> Option<u64> {
    let Value::Number(n) = ct else {
        return None;
    };
    n.as_u64().or_else(|| {
        let f = n.as_f64()?;
        [CertificateSchema::BATCH_CT, CertificateSchema::SINGLE_CT]
            .into_iter()
            .find(|&known| f == known as f64)
    })
}

fn invalid_field(ct: u8, err: serde_json::Error) -> MalformedInput {
    MalformedInput::InvalidField {
        ct,
        reason: err.to_string(),
    }
}
