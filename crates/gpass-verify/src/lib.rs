//! # gpass-verify — Certificate Verification
//!
//! Composes the parsing primitives of `gpass-core` with the trust anchors of
//! `gpass-crypto` into one call:
//!
//! ```text
//! raw bytes ─ split ─┬─ signature ──────────────────────────┐
//!                    └─ payload ─ interpret ─ digest rule ─ digest ─ anchors ─ trusted?
//! ```
//!
//! - **Pipeline** (`pipeline.rs`): `verify_certificate` and the reusable
//!   `CertificateVerifier`.
//! - **Result** (`result.rs`): identities plus the trust flag.

pub mod pipeline;
pub mod result;

pub use gpass_core::{CertificateError, FieldValue, IdentityRecord, MalformedInput};
pub use pipeline::{verify_certificate, CertificateVerifier};
pub use result::VerificationResult;
