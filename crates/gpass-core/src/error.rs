//! # Error Types
//!
//! Two failure classes reach the caller before any signature is checked:
//! the input could not be read at all (`MalformedInput`), or it was read but
//! names a certificate layout we do not know (`UnsupportedSchema`).
//!
//! A signature that fails to verify is not an error. It surfaces as
//! `trusted == false` in the verification result.

use thiserror::Error;

/// Top-level error for certificate parsing.
#[derive(Error, Debug)]
pub enum CertificateError {
    /// The raw bytes or payload are structurally unusable.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] MalformedInput),

    /// The `ct` discriminant is present but not a recognised certificate type.
    #[error("unsupported certificate schema: ct={ct}")]
    UnsupportedSchema {
        /// The discriminant as it appeared in the payload.
        ct: String,
    },
}

/// The specific reason an input was rejected as malformed.
#[derive(Error, Debug)]
pub enum MalformedInput {
    /// No `#` byte separates signature from payload.
    #[error("missing '#' delimiter between signature and payload")]
    MissingDelimiter,

    /// The signature segment is not valid base64.
    #[error("signature segment is not valid base64: {0}")]
    SignatureEncoding(#[from] base64::DecodeError),

    /// The payload is not valid UTF-8 text.
    #[error("payload is not valid UTF-8: {0}")]
    PayloadEncoding(#[from] std::str::Utf8Error),

    /// The payload is not well-formed JSON.
    #[error("payload is not valid JSON: {0}")]
    PayloadSyntax(#[from] serde_json::Error),

    /// The payload has no `ct` field.
    #[error("payload has no 'ct' discriminant")]
    MissingDiscriminant,

    /// A field required by the selected layout is missing or mistyped.
    #[error("ct={ct} payload field error: {reason}")]
    InvalidField {
        /// The discriminant of the layout being read.
        ct: u8,
        /// Description from the deserializer.
        reason: String,
    },
}

impl CertificateError {
    /// True for any `MalformedInput` variant.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedInput(_))
    }

    /// True for `UnsupportedSchema`.
    pub fn is_unsupported_schema(&self) -> bool {
        matches!(self, Self::UnsupportedSchema { .. })
    }
}
