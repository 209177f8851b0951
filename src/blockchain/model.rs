use log::debug;
use serde::Serialize;
use std::sync::Arc;

use super::{Block, BlockSpec, DEFAULT_PAYLOAD, FOLLOW_UP_PAYLOADS, GENESIS};
use crate::digest::DigestFunction;
use crate::error::Result;

/// Fold `specs` into a chain, threading each block's digest into the next.
/// The first hash failure aborts the whole build.
pub fn build_chain(digest_fn: &dyn DigestFunction, specs: &[BlockSpec]) -> Result<Vec<Block>> {
    specs
        .iter()
        .try_fold(Vec::with_capacity(specs.len()), |mut chain: Vec<Block>, spec| {
            let previous = chain
                .last()
                .map(|b| b.digest.clone())
                .unwrap_or_else(|| GENESIS.to_string());
            chain.push(Block::seal(spec, previous, digest_fn)?);
            Ok(chain)
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BrokenReason {
    /// Indices are not 1, 2, 3, ...
    IndexGap,
    /// Stored digest differs from the digest of the block's own fields.
    DigestMismatch,
    /// `previous_digest` does not point at the preceding block (or GENESIS).
    LinkMismatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChainReport {
    Empty,
    Intact { length: usize },
    Broken { index: u64, reason: BrokenReason },
}

impl ChainReport {
    pub fn is_intact(&self) -> bool {
        matches!(self, ChainReport::Intact { .. })
    }
}

/// Walk the chain and report the first block that breaks integrity.
pub fn verify_chain(digest_fn: &dyn DigestFunction, blocks: &[Block]) -> Result<ChainReport> {
    if blocks.is_empty() {
        return Ok(ChainReport::Empty);
    }

    for (pos, block) in blocks.iter().enumerate() {
        let broken = |reason| ChainReport::Broken {
            index: block.index,
            reason,
        };

        if block.index != pos as u64 + 1 {
            return Ok(broken(BrokenReason::IndexGap));
        }

        let expected_prev = match pos {
            0 => GENESIS,
            _ => blocks[pos - 1].digest.as_str(),
        };
        if block.previous_digest != expected_prev {
            return Ok(broken(BrokenReason::LinkMismatch));
        }

        if !block.is_sealed(digest_fn)? {
            return Ok(broken(BrokenReason::DigestMismatch));
        }
    }

    Ok(ChainReport::Intact {
        length: blocks.len(),
    })
}

/// The linked-block widget: one user payload followed by fixed blocks.
#[derive(Clone)]
pub struct ChainDemo {
    digest_fn: Arc<dyn DigestFunction>,
    default_payload: String,
}

impl ChainDemo {
    pub fn new(digest_fn: Arc<dyn DigestFunction>) -> Self {
        Self {
            digest_fn,
            default_payload: DEFAULT_PAYLOAD.to_string(),
        }
    }

    /// Override the block 1 payload used for blank input. A blank override
    /// keeps the built-in default.
    pub fn with_default_payload(mut self, payload: &str) -> Self {
        let payload = payload.trim();
        if !payload.is_empty() {
            self.default_payload = payload.to_string();
        }
        self
    }

    pub fn default_payload(&self) -> &str {
        &self.default_payload
    }

    pub fn digest_fn(&self) -> &dyn DigestFunction {
        self.digest_fn.as_ref()
    }

    /// Block specs for the given input; blank input falls back to the default.
    pub fn specs(&self, user_payload: &str) -> Vec<BlockSpec> {
        let first = match user_payload.trim() {
            "" => self.default_payload.clone(),
            trimmed => trimmed.to_string(),
        };
        std::iter::once(first)
            .chain(FOLLOW_UP_PAYLOADS.iter().map(|p| p.to_string()))
            .enumerate()
            .map(|(i, payload)| BlockSpec::new(i as u64 + 1, payload))
            .collect()
    }

    /// Rebuild the whole chain from scratch.
    pub fn recompute(&self, user_payload: &str) -> Result<Vec<Block>> {
        let specs = self.specs(user_payload);
        let chain = build_chain(self.digest_fn(), &specs)?;
        debug!(
            "CHAIN - rebuilt {} blocks (tip={})",
            chain.len(),
            chain.last().map(|b| b.digest.as_str()).unwrap_or("-")
        );
        Ok(chain)
    }

    pub fn verify(&self, blocks: &[Block]) -> Result<ChainReport> {
        verify_chain(self.digest_fn(), blocks)
    }
}
