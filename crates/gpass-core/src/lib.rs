//! # gpass-core — Green Pass Certificate Primitives
//!
//! The leaf crate of the Green Pass workspace. It turns the raw bytes read
//! out of a certificate QR code into typed values, without touching any key
//! material:
//!
//! 1. **Splitting** (`split.rs`): `<base64 signature>#<json payload>` into a
//!    decoded signature and a borrowed payload.
//! 2. **Schema interpretation** (`schema.rs`): the `ct` discriminant selects
//!    between the batch and single certificate layouts.
//! 3. **Identity records** (`identity.rs`): one record per person covered.
//! 4. **Digest rules** (`digest.rs`): the exact bytes each issuer signed over.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `gpass-*` crates.
//! - No I/O, no logging, no global state. Every function is pure.
//! - No `.unwrap()` outside tests.

pub mod digest;
pub mod error;
pub mod identity;
pub mod schema;
pub mod split;

// Re-export primary types for ergonomic imports.
pub use digest::{compute_digest, DigestRule};
pub use error::{CertificateError, MalformedInput};
pub use identity::{FieldValue, IdentityRecord};
pub use schema::{interpret, BatchCertificate, CertificateSchema, PersonEntry, SingleCertificate};
pub use split::{split, SignedPayload, DELIMITER};
