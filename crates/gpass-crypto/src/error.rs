//! # Cryptographic Error Types
//!
//! Loading a trust store fails loudly: a key that cannot be parsed, or a
//! config that names a missing file, is a deployment error. Checking a
//! signature against one anchor fails quietly: the verifier logs the reason
//! and moves on to the next anchor.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from building a trust store.
#[derive(Error, Debug)]
pub enum TrustStoreError {
    /// Key material could not be parsed for the declared algorithm.
    #[error("invalid key for anchor '{name}': {reason}")]
    InvalidKey {
        /// Anchor name.
        name: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The trust-store descriptor is not valid YAML or has the wrong shape.
    #[error("trust store config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// A config or key file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The descriptor lists no anchors.
    #[error("trust store has no anchors")]
    EmptyTrustStore,
}

/// Why a single anchor rejected a signature.
///
/// Never returned from [`crate::verifier::verify`]; it only feeds the
/// per-anchor debug trace.
#[derive(Error, Debug)]
pub enum AnchorRejection {
    /// The signature bytes are not an encoding this anchor's scheme accepts.
    #[error("signature encoding rejected: {0}")]
    SignatureFormat(String),

    /// Well-formed signature that does not match key and message.
    #[error("signature mismatch: {0}")]
    Mismatch(String),
}
