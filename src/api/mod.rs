mod chain;
mod health;
mod lessons;
mod mempool;
pub mod models;
mod page;
mod wallet;

use actix_web::HttpResponse;
use actix_web::web::{self, ServiceConfig};
use log::{info, warn};

use crate::error::SandboxError;
use crate::lessons::{DataMode, GasQuote};
use crate::page::{DATA_RESULT, GAS_MOOD, GAS_OUTPUT, KEY_INFO, MEMPOOL_LIST};

pub use chain::recompute_chain;
pub use models::AppState;

pub fn init_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(health::health_check)
            .service(chain::get_chain)
            .service(chain::post_recompute)
            .service(chain::post_verify)
            .service(page::get_region)
            .service(wallet::get_wallet)
            .service(wallet::post_sign)
            .service(wallet::post_verify)
            .service(mempool::post_tx)
            .service(mempool::get_mempool)
            .service(mempool::post_mine)
            .service(lessons::get_gas)
            .service(lessons::get_data)
            .service(lessons::post_safety)
            .service(lessons::post_progress),
    );
}

/// Initial page load: every widget renders once with its defaults.
/// A chain failure is returned only after the other widgets have rendered.
pub fn boot(state: &AppState) -> Result<(), SandboxError> {
    let chain = recompute_chain(state, "");

    let key_info = state.wallet.lock().expect("mutex poisoned").key_info();
    let quote = GasQuote::new(None, None)?;
    let example = DataMode::OnChain.example();

    let mut page = state.page.lock().expect("mutex poisoned");
    page.present(KEY_INFO, state.renderer.key_info(&key_info));
    page.present(MEMPOOL_LIST, state.renderer.mempool(&[]));
    page.present(GAS_OUTPUT, quote.to_string());
    page.present(GAS_MOOD, quote.mood.label().to_string());
    page.present(DATA_RESULT, state.renderer.data_example(&example));
    info!(
        "BOOT - widgets rendered (default payload {:?})",
        state.chain_demo.default_payload()
    );
    chain.map(|_| ())
}

pub(crate) fn error_response(err: &SandboxError) -> HttpResponse {
    warn!("request failed: {err}");
    let body = models::ErrorResponse {
        error: err.to_string(),
    };
    match err {
        SandboxError::HashUnavailable(_) => HttpResponse::ServiceUnavailable().json(body),
        SandboxError::MissingOutputTarget(_) => HttpResponse::NotFound().json(body),
        SandboxError::InvalidInput(_) => HttpResponse::BadRequest().json(body),
    }
}
