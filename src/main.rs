use crate::app::App;
use crate::config::ApimoConfig;
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod apimo;
mod app;
mod config;
mod domain;
mod errors;
mod handlers;
mod responses;
mod router;


const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ags_biens=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1️⃣ Validate the APIMO credentials once; a failure is kept, not fatal
    let app = App::from_config(ApimoConfig::from_env());

    // 2️⃣ Start the server
    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let addr: SocketAddr = match bind.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(%bind, error = %e, "invalid BIND_ADDR");
            std::process::exit(1);
        }
    };
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 3️⃣ Serve requests, every one sees the same read-only app
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "Server ended with error");
    }

    tracing::info!("Server shut down cleanly.");
}
