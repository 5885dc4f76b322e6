//! # gpass-crypto — Trust Anchors and Signature Checking
//!
//! Holds the public keys a Green Pass certificate may be signed with and
//! decides whether a signature is trusted:
//!
//! - **Anchors** (`anchor.rs`): RSA PKCS#1 v1.5 / SHA-256 and ECDSA
//!   (P-256 or P-384) / SHA-256 public keys, parsed from PEM.
//! - **Verifier** (`verifier.rs`): ordered first-match search over anchors,
//!   collapsing to a boolean.
//! - **Config** (`config.rs`): YAML trust-store descriptor and key loading.
//!
//! ## Crate Policy
//!
//! - Independent of `gpass-core`: callers pass the message bytes already
//!   produced by the certificate's digest rule.
//! - No private keys outside `testing`, which only builds for tests or with
//!   the `test-utils` feature.

pub mod anchor;
pub mod config;
pub mod error;
pub mod verifier;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use anchor::{AnchorAlgorithm, TrustAnchor};
pub use config::{AnchorConfig, TrustStoreConfig};
pub use error::{AnchorRejection, TrustStoreError};
pub use verifier::{first_match, verify, TrustStore};
