//! Main entry point for the frame server.
//!
//! Reads the runtime configuration and launches the HTTP server exposing the
//! frame, image and landing endpoints of both games.

use actix_web::{App, HttpServer, middleware, web};
use env_logger::Env;
use log::info;

pub mod config;
mod game;
mod server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = config::server::ServerConfig::from_env();
    let bind_addr = config.bind_addr.clone();
    info!("[Main] Listening on {} (default game: {})", bind_addr, config.default_game);

    // Shared application state for HTTP handlers.
    let state = web::Data::new(server::state::AppState::new(config));

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::new("%r %s %Ts"))
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(server::router::config)
    })
    .bind(bind_addr)?
    .run()
    .await
}
