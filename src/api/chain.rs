use actix_web::{HttpResponse, Responder, get, post, web};
use log::{debug, error, info};
use std::sync::atomic::Ordering;

use super::error_response;
use super::models::{
    AppState, ChainRender, ChainResponse, RecomputeRequest, VerifyRequest, VerifyResponse,
};
use crate::blockchain::ChainView;
use crate::digest::is_well_formed;
use crate::error::{Result, SandboxError};
use crate::page::CHAIN_OUTPUT;

/// Rebuild the chain for `payload` and commit it to the chain region.
///
/// The chain is hashed outside any lock. Each call draws a ticket; if a
/// later call has already committed, this render is discarded. On a hash
/// failure the region is cleared and the error is returned.
pub fn recompute_chain(state: &AppState, payload: &str) -> Result<ChainRender> {
    let ticket = state.chain_tickets.fetch_add(1, Ordering::SeqCst) + 1;

    if !state.page.lock().expect("mutex poisoned").has_region(CHAIN_OUTPUT) {
        debug!("CHAIN - no #{CHAIN_OUTPUT} on page, skipping render");
        return Ok(ChainRender::Skipped);
    }

    let blocks = match state.chain_demo.recompute(payload) {
        Ok(blocks) => blocks,
        Err(e) => {
            error!("CHAIN - render #{ticket} aborted: {e}");
            let mut page = state.page.lock().expect("mutex poisoned");
            if page.commit(CHAIN_OUTPUT, ticket, String::new())? {
                state.last_chain.lock().expect("mutex poisoned").clear();
            }
            return Err(e);
        }
    };

    let view = ChainView::from_chain(&blocks);
    let markup = state.renderer.chain(&view);
    let applied = {
        let mut page = state.page.lock().expect("mutex poisoned");
        let applied = page.commit(CHAIN_OUTPUT, ticket, markup)?;
        if applied {
            *state.last_chain.lock().expect("mutex poisoned") = blocks.clone();
        }
        applied
    };

    info!(
        "CHAIN - render #{} {} (tip={})",
        ticket,
        if applied { "committed" } else { "superseded" },
        blocks.last().map(|b| b.digest.as_str()).unwrap_or("-")
    );
    Ok(ChainRender::Rendered {
        ticket,
        applied,
        view,
        blocks,
    })
}

/// The chain currently shown on the page.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    let blocks = state.last_chain.lock().expect("mutex poisoned").clone();
    HttpResponse::Ok().json(ChainResponse {
        length: blocks.len(),
        view: ChainView::from_chain(&blocks),
        blocks,
    })
}

/// "Update chain" button.
#[post("/chain/recompute/")]
pub async fn post_recompute(
    state: web::Data<AppState>,
    body: web::Json<RecomputeRequest>,
) -> impl Responder {
    match recompute_chain(&state, &body.payload) {
        Ok(render) => HttpResponse::Ok().json(render),
        Err(e) => error_response(&e),
    }
}

/// Check linkage and digests of a client-supplied chain.
#[post("/chain/verify/")]
pub async fn post_verify(
    state: web::Data<AppState>,
    body: web::Json<VerifyRequest>,
) -> impl Responder {
    if let Some(bad) = body.blocks.iter().find(|b| !is_well_formed(&b.digest)) {
        return error_response(&SandboxError::InvalidInput(format!(
            "block {} digest is not 64 lowercase hex chars",
            bad.index
        )));
    }
    match state.chain_demo.verify(&body.blocks) {
        Ok(report) => HttpResponse::Ok().json(VerifyResponse {
            valid: report.is_intact(),
            report,
        }),
        Err(e) => error_response(&e),
    }
}
