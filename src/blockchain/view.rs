use serde::Serialize;

use super::{Block, DIGEST_PREFIX_LEN, PREVIOUS_PREFIX_LEN, TAMPER_NOTE};

/// Display record for one block card. Prefixes are for display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockView {
    pub label: String, // zero-padded index, e.g. "01"
    pub payload: String,
    pub digest_prefix: String,
    pub previous_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainView {
    pub blocks: Vec<BlockView>,
    pub note: String,
}

fn prefix(value: &str, len: usize) -> String {
    value.chars().take(len).collect()
}

impl From<&Block> for BlockView {
    fn from(block: &Block) -> Self {
        Self {
            label: format!("{:02}", block.index),
            payload: block.payload.clone(),
            digest_prefix: prefix(&block.digest, DIGEST_PREFIX_LEN),
            previous_prefix: prefix(&block.previous_digest, PREVIOUS_PREFIX_LEN),
        }
    }
}

impl ChainView {
    pub fn from_chain(chain: &[Block]) -> Self {
        Self {
            blocks: chain.iter().map(BlockView::from).collect(),
            note: TAMPER_NOTE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChainView;
    use crate::blockchain::{ChainDemo, GENESIS, TAMPER_NOTE};
    use crate::digest::Sha256Digest;
    use std::sync::Arc;

    #[test]
    fn view_truncates_for_display_only() {
        let chain = ChainDemo::new(Arc::new(Sha256Digest)).recompute("").unwrap();
        let view = ChainView::from_chain(&chain);

        assert_eq!(view.blocks.len(), 3);
        assert_eq!(view.note, TAMPER_NOTE);

        let labels: Vec<_> = view.blocks.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["01", "02", "03"]);

        assert_eq!(view.blocks[0].previous_prefix, GENESIS);
        assert_eq!(view.blocks[0].digest_prefix, chain[0].digest[..28]);
        assert_eq!(view.blocks[1].previous_prefix, chain[0].digest[..18]);
        assert_eq!(view.blocks[2].payload, "Carol pays Dan 0.1 coin");

        // the chain itself still carries full digests
        assert_eq!(chain[1].previous_digest.len(), 64);
    }
}
