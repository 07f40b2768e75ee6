// src/main.rs

use dashboard_server::models::AppState;
use quote_service::{FinancialStore, QuoteClient};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    // A missing credential is fatal here, once, not per request.
    let quotes = QuoteClient::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;
    let store = FinancialStore::default();

    println!("Starting dashboard server at http://127.0.0.1:8080");
    dashboard_server::run_server(AppState { store, quotes }, "127.0.0.1:8080").await
}
