use serde::{Deserialize, Serialize};
use std::sync::atomic::AtomicU64;
use std::sync::{Arc, Mutex};

use crate::blockchain::{Block, ChainDemo, ChainReport, ChainView};
use crate::config::Config;
use crate::digest::{DigestFunction, Sha256Digest};
use crate::error::Result;
use crate::lessons::{DataExample, GasQuote, PathProgress, SafetyScore};
use crate::page::{HtmlRenderer, Page, Renderer};
use crate::transaction::{DemoTx, Mempool};
use crate::wallet::{DemoWallet, KeyInfo, SignatureOutcome};

/// Shared state: every widget owns its own slot; nothing is global.
pub struct AppState {
    pub digest_fn: Arc<dyn DigestFunction>,
    pub renderer: Arc<dyn Renderer>,
    pub chain_demo: ChainDemo,
    /// Ticket counter for chain recomputes (latest trigger wins).
    pub chain_tickets: AtomicU64,
    /// Full blocks behind the chain currently shown.
    pub last_chain: Mutex<Vec<Block>>,
    pub page: Mutex<Page>,
    pub wallet: Mutex<DemoWallet>,
    pub mempool: Mutex<Mempool>,
    pub block_slots: usize,
}

impl AppState {
    /// SHA-256, HTML markup and the full learning page.
    pub fn new(config: &Config) -> Result<Self> {
        let digest_fn: Arc<dyn DigestFunction> = Arc::new(Sha256Digest);
        let mut chain_demo = ChainDemo::new(digest_fn.clone());
        if let Some(payload) = config.default_payload.as_deref() {
            chain_demo = chain_demo.with_default_payload(payload);
        }
        let wallet = DemoWallet::generate(digest_fn.as_ref())?;
        Ok(Self::from_parts(
            digest_fn,
            chain_demo,
            wallet,
            Page::learning(),
            config.block_slots,
        ))
    }

    pub fn from_parts(
        digest_fn: Arc<dyn DigestFunction>,
        chain_demo: ChainDemo,
        wallet: DemoWallet,
        page: Page,
        block_slots: usize,
    ) -> Self {
        Self {
            digest_fn,
            renderer: Arc::new(HtmlRenderer),
            chain_demo,
            chain_tickets: AtomicU64::new(0),
            last_chain: Mutex::new(Vec::new()),
            page: Mutex::new(page),
            wallet: Mutex::new(wallet),
            mempool: Mutex::new(Mempool::new()),
            block_slots,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/* ---------- Chain API Models ---------- */

#[derive(Deserialize)]
pub struct RecomputeRequest {
    #[serde(default)]
    pub payload: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChainRender {
    /// The page has no chain output region.
    Skipped,
    Rendered {
        ticket: u64,
        /// False when a newer recompute had already been committed.
        applied: bool,
        view: ChainView,
        blocks: Vec<Block>,
    },
}

#[derive(Serialize)]
pub struct ChainResponse {
    pub length: usize,
    pub view: ChainView,
    pub blocks: Vec<Block>,
}

#[derive(Deserialize)]
pub struct VerifyRequest {
    pub blocks: Vec<Block>,
}

#[derive(Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub report: ChainReport,
}

/* ---------- Page API Models ---------- */

#[derive(Serialize)]
pub struct RegionResponse {
    pub region: String,
    pub content: String,
}

/* ---------- Wallet API Models ---------- */

#[derive(Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct WalletResponse {
    pub key_info: KeyInfo,
    pub signed: bool,
}

#[derive(Serialize)]
pub struct SignatureResponse {
    #[serde(flatten)]
    pub outcome: SignatureOutcome,
}

/* ---------- Mempool API Models ---------- */

#[derive(Serialize)]
pub struct NewTxResponse {
    pub tx: DemoTx,
    pub mempool_size: usize,
}

#[derive(Serialize)]
pub struct MempoolResponse {
    pub size: usize,
    pub transactions: Vec<DemoTx>,
}

#[derive(Serialize)]
pub struct BlockSlotsResponse {
    pub slots: usize,
    pub picked: Vec<DemoTx>,
}

/* ---------- Lessons API Models ---------- */

#[derive(Deserialize)]
pub struct GasQuery {
    pub limit: Option<f64>,
    pub price: Option<f64>,
}

#[derive(Serialize)]
pub struct GasResponse {
    #[serde(flatten)]
    pub quote: GasQuote,
    pub summary: String,
    pub mood_label: &'static str,
}

#[derive(Serialize)]
pub struct DataResponse {
    #[serde(flatten)]
    pub example: DataExample,
}

#[derive(Deserialize)]
pub struct SafetyRequest {
    pub checks: Vec<bool>,
}

#[derive(Serialize)]
pub struct SafetyResponse {
    #[serde(flatten)]
    pub score: SafetyScore,
    pub summary: String,
}

#[derive(Deserialize)]
pub struct ProgressRequest {
    pub section_tops: Vec<f64>,
    pub viewport_height: f64,
}

#[derive(Serialize)]
pub struct ProgressResponse {
    #[serde(flatten)]
    pub progress: PathProgress,
    pub summary: String,
}
