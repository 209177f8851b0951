use actix_web::{HttpResponse, Responder, get, post, web};
use log::debug;

use super::error_response;
use super::models::{AppState, MessageRequest, SignatureResponse, WalletResponse};
use crate::page::SIG_OUTPUT;
use crate::wallet::SignatureOutcome;

fn show(state: &AppState, outcome: &SignatureOutcome) {
    let markup = state.renderer.signature(outcome);
    state
        .page
        .lock()
        .expect("mutex poisoned")
        .present(SIG_OUTPUT, markup);
}

/// Demo identity (prefixes only; the private key never leaves the state).
#[get("/wallet/")]
pub async fn get_wallet(state: web::Data<AppState>) -> impl Responder {
    let wallet = state.wallet.lock().expect("mutex poisoned");
    HttpResponse::Ok().json(WalletResponse {
        key_info: wallet.key_info(),
        signed: wallet.signature().is_some(),
    })
}

#[post("/wallet/sign/")]
pub async fn post_sign(
    state: web::Data<AppState>,
    body: web::Json<MessageRequest>,
) -> impl Responder {
    let signed = {
        let mut wallet = state.wallet.lock().expect("mutex poisoned");
        wallet.sign(&body.message, state.digest_fn.as_ref())
    };
    match signed {
        Ok(outcome) => {
            debug!("WALLET - signed {} bytes", body.message.len());
            show(&state, &outcome);
            HttpResponse::Ok().json(SignatureResponse { outcome })
        }
        Err(e) => error_response(&e),
    }
}

#[post("/wallet/verify/")]
pub async fn post_verify(
    state: web::Data<AppState>,
    body: web::Json<MessageRequest>,
) -> impl Responder {
    let checked = {
        let wallet = state.wallet.lock().expect("mutex poisoned");
        wallet.verify(&body.message, state.digest_fn.as_ref())
    };
    match checked {
        Ok(outcome) => {
            show(&state, &outcome);
            HttpResponse::Ok().json(SignatureResponse { outcome })
        }
        Err(e) => error_response(&e),
    }
}
