use actix_web::{HttpResponse, Responder, get, web};

use super::error_response;
use super::models::{AppState, RegionResponse};

/// Current content of one output region of the page.
#[get("/page/{region}/")]
pub async fn get_region(state: web::Data<AppState>, path: web::Path<(String,)>) -> impl Responder {
    let region = path.into_inner().0;
    let page = state.page.lock().expect("mutex poisoned");
    match page.region(&region) {
        Ok(content) => HttpResponse::Ok().json(RegionResponse {
            content: content.to_string(),
            region,
        }),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use serde_json::Value;

    use crate::api::{AppState, boot, init_routes};
    use crate::config::Config;

    #[actix_web::test]
    async fn reads_booted_region() {
        let state = web::Data::new(AppState::new(&Config::default()).unwrap());
        boot(&state).unwrap();
        let app = test::init_service(App::new().app_data(state).configure(init_routes)).await;

        let req = test::TestRequest::get().uri("/api/v1/page/gas-mood/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["region"], "gas-mood");
        assert_eq!(body["content"], "Busy network 🟠");

        let req = test::TestRequest::get().uri("/api/v1/page/nope/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn health() {
        let app = test::init_service(App::new().configure(init_routes)).await;
        let req = test::TestRequest::get().uri("/api/v1/health/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
}
