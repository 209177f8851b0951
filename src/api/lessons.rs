use actix_web::{HttpResponse, Responder, get, post, web};

use super::error_response;
use super::models::{
    AppState, DataResponse, GasQuery, GasResponse, ProgressRequest, ProgressResponse,
    SafetyRequest, SafetyResponse,
};
use crate::error::SandboxError;
use crate::lessons::{DataMode, GasQuote, PathProgress, SafetyScore};
use crate::page::{DATA_RESULT, GAS_MOOD, GAS_OUTPUT, PROGRESS_TEXT, SAFETY_SCORE};

/// Gas limit / price inputs.
#[get("/gas/")]
pub async fn get_gas(state: web::Data<AppState>, query: web::Query<GasQuery>) -> impl Responder {
    let quote = match GasQuote::new(query.limit, query.price) {
        Ok(q) => q,
        Err(e) => return error_response(&e),
    };
    let summary = quote.to_string();
    {
        let mut page = state.page.lock().expect("mutex poisoned");
        page.present(GAS_OUTPUT, summary.clone());
        page.present(GAS_MOOD, quote.mood.label().to_string());
    }
    HttpResponse::Ok().json(GasResponse {
        mood_label: quote.mood.label(),
        quote,
        summary,
    })
}

/// On-chain / off-chain toggle.
#[get("/data/{mode}/")]
pub async fn get_data(state: web::Data<AppState>, path: web::Path<(String,)>) -> impl Responder {
    let mode: DataMode = match path.into_inner().0.parse() {
        Ok(m) => m,
        Err(e) => return error_response(&e),
    };
    let example = mode.example();
    let markup = state.renderer.data_example(&example);
    state
        .page
        .lock()
        .expect("mutex poisoned")
        .present(DATA_RESULT, markup);
    HttpResponse::Ok().json(DataResponse { example })
}

/// Wallet safety checklist; one bool per checkbox.
#[post("/safety/")]
pub async fn post_safety(
    state: web::Data<AppState>,
    body: web::Json<SafetyRequest>,
) -> impl Responder {
    let score = SafetyScore::tally(&body.checks);
    let summary = score.to_string();
    state
        .page
        .lock()
        .expect("mutex poisoned")
        .present(SAFETY_SCORE, summary.clone());
    HttpResponse::Ok().json(SafetyResponse { score, summary })
}

/// Learning-path progress from section offsets.
#[post("/progress/")]
pub async fn post_progress(
    state: web::Data<AppState>,
    body: web::Json<ProgressRequest>,
) -> impl Responder {
    let Some(progress) = PathProgress::measure(&body.section_tops, body.viewport_height) else {
        return error_response(&SandboxError::InvalidInput("no tracked sections".into()));
    };
    let summary = progress.to_string();
    state
        .page
        .lock()
        .expect("mutex poisoned")
        .present(PROGRESS_TEXT, summary.clone());
    HttpResponse::Ok().json(ProgressResponse { progress, summary })
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use crate::api::{AppState, init_routes};
    use crate::config::Config;
    use crate::page::{DATA_RESULT, SAFETY_SCORE};

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::new(&Config::default()).unwrap())
    }

    #[actix_web::test]
    async fn gas_quote() {
        let app = test::init_service(App::new().app_data(state()).configure(init_routes)).await;
        let req = test::TestRequest::get()
            .uri("/api/v1/gas/?limit=100000&price=75")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total_gwei"], 7_500_000.0);
        assert_eq!(body["mood"], "congested");
        assert_eq!(
            body["summary"],
            "100,000 gas × 75 gwei = 7,500,000 gwei ≈ 0.007500 ETH"
        );
    }

    #[actix_web::test]
    async fn data_toggle() {
        let state = state();
        let app = test::init_service(App::new().app_data(state.clone()).configure(init_routes)).await;
        let req = test::TestRequest::get().uri("/api/v1/data/off/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["mode"], "off_chain");
        assert!(
            state
                .page
                .lock()
                .unwrap()
                .region(DATA_RESULT)
                .unwrap()
                .starts_with("<strong>Off-chain example</strong>")
        );

        let req = test::TestRequest::get().uri("/api/v1/data/maybe/").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);
    }

    #[actix_web::test]
    async fn safety_and_progress() {
        let state = state();
        let app = test::init_service(App::new().app_data(state.clone()).configure(init_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/safety/")
            .set_json(json!({ "checks": [true, true, false, true] }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["percent"], 75);
        assert_eq!(
            state.page.lock().unwrap().region(SAFETY_SCORE).unwrap(),
            "Safety readiness: 75% — Solid but improve backup rigor"
        );

        let req = test::TestRequest::post()
            .uri("/api/v1/progress/")
            .set_json(json!({ "section_tops": [0.0, 900.0], "viewport_height": 1000.0 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["summary"], "50% of learning path explored");

        let req = test::TestRequest::post()
            .uri("/api/v1/progress/")
            .set_json(json!({ "section_tops": [], "viewport_height": 1000.0 }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);
    }
}
