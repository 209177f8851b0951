use super::model::DemoTx;

/// Block slots filled by the "mine" button unless configured otherwise.
pub const DEFAULT_BLOCK_SLOTS: usize = 3;

/// Unordered holding list of pending demo transactions.
#[derive(Debug, Default)]
pub struct Mempool {
    txs: Vec<DemoTx>,
}

impl Mempool {
    pub fn new() -> Self {
        Self { txs: Vec::new() }
    }

    pub fn add(&mut self, tx: DemoTx) {
        self.txs.push(tx);
    }

    pub fn len(&self) -> usize {
        self.txs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.txs.is_empty()
    }

    /// Pending transactions in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &DemoTx> {
        self.txs.iter()
    }

    /// Pick the `slots` highest-fee transactions; ties keep arrival order.
    /// The pool itself is left untouched.
    pub fn fill_block(&self, slots: usize) -> Vec<DemoTx> {
        let mut sorted = self.txs.clone();
        sorted.sort_by(|a, b| b.fee.total_cmp(&a.fee));
        sorted.truncate(slots);
        sorted
    }
}
