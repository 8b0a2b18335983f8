//! Static preview server for the built site.
//!
//! Serves the cargo-leptos output directory and falls back to `index.html`
//! so client-side routes resolve on direct navigation.

use std::net::SocketAddr;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

const SITE_ROOT: &str = "target/site";
const ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

#[tokio::main]
async fn main() {
    if simple_logger::init_with_level(log::Level::Info).is_err() {
        eprintln!("failed to initialize logger");
    }

    let index = format!("{SITE_ROOT}/index.html");
    let site = ServeDir::new(SITE_ROOT).not_found_service(ServeFile::new(index));
    let app = Router::new().fallback_service(site);

    let addr = SocketAddr::from(ADDR);
    log::info!("serving {SITE_ROOT} on http://{addr}");

    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(err) = axum::serve(listener, app).await {
                log::error!("server error: {err}");
            }
        }
        Err(err) => log::error!("failed to bind {addr}: {err}"),
    }
}
