pub mod mempool;
pub mod model;

pub use mempool::{DEFAULT_BLOCK_SLOTS, Mempool};
pub use model::{DemoTx, TxDraft, fee_bar_width};
