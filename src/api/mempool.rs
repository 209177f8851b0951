use actix_web::{HttpResponse, Responder, get, post, web};
use log::{debug, info};

use super::error_response;
use super::models::{AppState, BlockSlotsResponse, MempoolResponse, NewTxResponse};
use crate::page::{BLOCK_LIST, MEMPOOL_LIST};
use crate::transaction::{DemoTx, TxDraft};

/// "Add transaction" button: blank fields take the demo defaults.
#[post("/mempool/tx/")]
pub async fn post_tx(state: web::Data<AppState>, body: web::Json<TxDraft>) -> impl Responder {
    let tx = match DemoTx::from_draft(&body) {
        Ok(tx) => tx,
        Err(e) => return error_response(&e),
    };

    let (pending, size) = {
        let mut mempool = state.mempool.lock().expect("mutex poisoned");
        mempool.add(tx.clone());
        (mempool.iter().cloned().collect::<Vec<_>>(), mempool.len())
    };
    debug!(
        "MEMPOOL - added {} ({} -> {}, fee {}); size now {}",
        tx.id, tx.from, tx.to, tx.fee, size
    );

    let markup = state.renderer.mempool(&pending);
    state
        .page
        .lock()
        .expect("mutex poisoned")
        .present(MEMPOOL_LIST, markup);

    HttpResponse::Ok().json(NewTxResponse {
        tx,
        mempool_size: size,
    })
}

#[get("/mempool/")]
pub async fn get_mempool(state: web::Data<AppState>) -> impl Responder {
    let mempool = state.mempool.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(MempoolResponse {
        size: mempool.len(),
        transactions: mempool.iter().cloned().collect(),
    })
}

/// "Mine block" button: fill the block slots by fee priority.
#[post("/mempool/mine/")]
pub async fn post_mine(state: web::Data<AppState>) -> impl Responder {
    let picked = {
        let mempool = state.mempool.lock().expect("mutex poisoned");
        if mempool.is_empty() {
            debug!("MINER - mempool empty, sealing an empty block");
        }
        mempool.fill_block(state.block_slots)
    };
    info!(
        "MINER - filled {}/{} slots (top fee {})",
        picked.len(),
        state.block_slots,
        picked.first().map(|t| t.fee).unwrap_or(0.0)
    );

    let markup = state.renderer.block_slots(&picked);
    state
        .page
        .lock()
        .expect("mutex poisoned")
        .present(BLOCK_LIST, markup);

    HttpResponse::Ok().json(BlockSlotsResponse {
        slots: state.block_slots,
        picked,
    })
}
