pub mod block;
pub mod model;
pub mod view;

pub use block::{Block, BlockSpec};
pub use model::{ChainDemo, ChainReport};
pub use view::ChainView;

/// Previous-digest reference of the first block.
pub const GENESIS: &str = "GENESIS";

/// Block 1 payload used when the input is blank.
pub const DEFAULT_PAYLOAD: &str = "Alice pays Bob 1 coin";

/// Fixed payloads of blocks 2 and 3.
pub const FOLLOW_UP_PAYLOADS: [&str; 2] = ["Bob pays Carol 0.2 coin", "Carol pays Dan 0.1 coin"];

/// Display-only truncation of the block's own digest.
pub const DIGEST_PREFIX_LEN: usize = 28;

/// Display-only truncation of the previous-digest reference.
pub const PREVIOUS_PREFIX_LEN: usize = 18;

pub const TAMPER_NOTE: &str =
    "Any edit in block 1 creates a new hash fingerprint and breaks every linked block after it.";
