use serde::{Deserialize, Serialize};

use crate::digest::DigestFunction;
use crate::error::Result;

/// A block before it is hashed: position and payload only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSpec {
    pub index: u64,
    pub payload: String,
}

impl BlockSpec {
    pub fn new(index: u64, payload: impl Into<String>) -> Self {
        Self {
            index,
            payload: payload.into(),
        }
    }
}

/// A sealed block of the demo chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub previous_digest: String,
    pub payload: String,
    pub digest: String, // digest of `serialize()`
}

impl Block {
    /// Canonical preimage: `index:{index}|prev:{previous_digest}|tx:{payload}`.
    pub fn preimage(index: u64, previous_digest: &str, payload: &str) -> String {
        format!("index:{index}|prev:{previous_digest}|tx:{payload}")
    }

    /// Hash `spec` on top of `previous_digest`.
    pub fn seal(
        spec: &BlockSpec,
        previous_digest: String,
        digest_fn: &dyn DigestFunction,
    ) -> Result<Self> {
        let digest = digest_fn.digest(&Self::preimage(spec.index, &previous_digest, &spec.payload))?;
        Ok(Self {
            index: spec.index,
            previous_digest,
            payload: spec.payload.clone(),
            digest,
        })
    }

    pub fn serialize(&self) -> String {
        Self::preimage(self.index, &self.previous_digest, &self.payload)
    }

    /// Recompute the digest from the block's fields (excluding `digest`).
    pub fn compute_digest(&self, digest_fn: &dyn DigestFunction) -> Result<String> {
        digest_fn.digest(&self.serialize())
    }

    /// Whether the cached `digest` still matches the content.
    /// (Does NOT check the link to the previous block.)
    pub fn is_sealed(&self, digest_fn: &dyn DigestFunction) -> Result<bool> {
        Ok(self.digest == self.compute_digest(digest_fn)?)
    }
}
