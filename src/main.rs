mod api;
mod blockchain;
mod config;
mod digest;
mod error;
mod lessons;
mod page;
mod transaction;
mod wallet;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use log::error;

use api::AppState;
use config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let config = Config::from_env();

    let state = AppState::new(&config).map_err(std::io::Error::other)?;
    if let Err(e) = api::boot(&state) {
        error!("initial render failed: {e}");
    }

    println!(
        "⛓️ Starting chain sandbox at http://{}:{}",
        config.host, config.port
    );

    let state = web::Data::new(state);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
