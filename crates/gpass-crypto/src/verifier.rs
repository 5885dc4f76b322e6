//! # Trust-Anchor Verification
//!
//! Anchors are tried strictly in order and the first one that accepts the
//! signature wins. Rejections from individual anchors are expected (an RSA
//! signature will never verify under the EC key) and are only traced. When
//! every anchor rejects, the answer is `false`, not an error.
//!
//! The loop is sequential with an early exit; there are two anchors in the
//! default store.

use crate::anchor::TrustAnchor;

/// Return the first anchor whose key accepts `signature` over `message`.
pub fn first_match<'a>(
    signature: &[u8],
    message: &[u8],
    anchors: &'a [TrustAnchor],
) -> Option<&'a TrustAnchor> {
    for anchor in anchors {
        match anchor.verify(message, signature) {
            Ok(()) => {
                tracing::debug!(
                    anchor = anchor.name(),
                    algorithm = %anchor.algorithm(),
                    "signature accepted"
                );
                return Some(anchor);
            }
            Err(reason) => {
                tracing::debug!(
                    anchor = anchor.name(),
                    algorithm = %anchor.algorithm(),
                    %reason,
                    "signature rejected by anchor"
                );
            }
        }
    }
    None
}

/// True if any anchor, tried in order, accepts `signature` over `message`.
///
/// `message` is the output of the certificate's digest rule. An empty
/// anchor list yields `false`.
pub fn verify(signature: &[u8], message: &[u8], anchors: &[TrustAnchor]) -> bool {
    first_match(signature, message, anchors).is_some()
}

/// An ordered, immutable set of trust anchors.
///
/// Built once and shared read-only across verification calls; it holds no
/// interior mutability, so `&TrustStore` is freely `Send + Sync`.
#[derive(Debug, Clone, Default)]
pub struct TrustStore {
    anchors: Vec<TrustAnchor>,
}

impl TrustStore {
    /// Create a store from anchors in the order they should be tried.
    pub fn new(anchors: Vec<TrustAnchor>) -> Self {
        Self { anchors }
    }

    /// Append an anchor to the end of the search order.
    pub fn with_anchor(mut self, anchor: TrustAnchor) -> Self {
        self.anchors.push(anchor);
        self
    }

    /// Anchors in search order.
    pub fn anchors(&self) -> &[TrustAnchor] {
        &self.anchors
    }

    /// See [`verify`].
    pub fn verify(&self, signature: &[u8], message: &[u8]) -> bool {
        verify(signature, message, &self.anchors)
    }

    /// See [`first_match`].
    pub fn first_match(&self, signature: &[u8], message: &[u8]) -> Option<&TrustAnchor> {
        first_match(signature, message, &self.anchors)
    }
}
