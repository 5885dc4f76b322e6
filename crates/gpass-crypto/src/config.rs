//! # Trust-Store Configuration
//!
//! A YAML descriptor lists anchors in search order and points at the PEM
//! file holding each key:
//!
//! ```yaml
//! anchors:
//!   - name: ramzor-rsa
//!     algorithm: rsa-pkcs1v15-sha256
//!     key: RamzorQRPubKey.pem
//!   - name: il-nb-dsc-01
//!     algorithm: ecdsa-sha256
//!     key: IL-NB-DSC-01.pem
//! ```
//!
//! Relative key paths resolve against the descriptor's directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::anchor::{AnchorAlgorithm, TrustAnchor};
use crate::error::TrustStoreError;
use crate::verifier::TrustStore;

/// File name of the default RSA anchor key.
pub const DEFAULT_RSA_KEY_FILE: &str = "RamzorQRPubKey.pem";
/// File name of the default EC anchor key.
pub const DEFAULT_EC_KEY_FILE: &str = "IL-NB-DSC-01.pem";

/// One anchor entry in the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnchorConfig {
    /// Name used in logs.
    pub name: String,
    /// Signature scheme.
    pub algorithm: AnchorAlgorithm,
    /// Path to the PEM public key.
    pub key: PathBuf,
}

/// The trust-store descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrustStoreConfig {
    /// Anchors in search order.
    pub anchors: Vec<AnchorConfig>,
}

impl TrustStoreConfig {
    /// The default store: the RSA key, then the EC key, both expected in `dir`.
    pub fn default_in(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            anchors: vec![
                AnchorConfig {
                    name: "ramzor-rsa".to_string(),
                    algorithm: AnchorAlgorithm::RsaPkcs1v15Sha256,
                    key: dir.join(DEFAULT_RSA_KEY_FILE),
                },
                AnchorConfig {
                    name: "il-nb-dsc-01".to_string(),
                    algorithm: AnchorAlgorithm::EcdsaSha256,
                    key: dir.join(DEFAULT_EC_KEY_FILE),
                },
            ],
        }
    }

    /// Parse a descriptor from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TrustStoreError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read a descriptor file. Relative key paths are rebased onto the
    /// file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TrustStoreError> {
        let path = path.as_ref();
        let yaml = read_file(path)?;
        let mut config = Self::from_yaml_str(&yaml)?;
        if let Some(base) = path.parent() {
            for anchor in &mut config.anchors {
                if anchor.key.is_relative() {
                    anchor.key = base.join(&anchor.key);
                }
            }
        }
        Ok(config)
    }

    /// Read every key file and build the trust store.
    ///
    /// # Errors
    ///
    /// - [`TrustStoreError::EmptyTrustStore`] if no anchors are listed.
    /// - [`TrustStoreError::Io`] if a key file cannot be read.
    /// - [`TrustStoreError::InvalidKey`] if a key does not match its algorithm.
    pub fn load(&self) -> Result<TrustStore, TrustStoreError> {
        if self.anchors.is_empty() {
            return Err(TrustStoreError::EmptyTrustStore);
        }
        let anchors = self
            .anchors
            .iter()
            .map(|entry| {
                let pem = read_file(&entry.key)?;
                let anchor = TrustAnchor::from_pem(&entry.name, entry.algorithm, &pem)?;
                tracing::info!(
                    anchor = %entry.name,
                    algorithm = %entry.algorithm,
                    key = %entry.key.display(),
                    "loaded trust anchor"
                );
                Ok(anchor)
            })
            .collect::<Result<Vec<_>, TrustStoreError>>()?;
        Ok(TrustStore::new(anchors))
    }
}

fn read_file(path: &Path) -> Result<String, TrustStoreError> {
    std::fs::read_to_string(path).map_err(|source| TrustStoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}
