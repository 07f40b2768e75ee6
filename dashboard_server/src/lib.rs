// src/lib.rs

pub mod charts;
pub mod config;
pub mod handlers;
pub mod kpis;
pub mod models;
pub mod quarters;

pub async fn run_server(state: models::AppState, addr: &str) -> std::io::Result<()> {
    use actix_web::{web, App, HttpServer};
    use handlers::{companies, company_dashboard, compare_dashboard, health_check, index};

    let state = web::Data::new(state);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(index)
            .service(health_check)
            .service(companies)
            .service(company_dashboard)
            .service(compare_dashboard)
    })
    .bind(addr)?
    .run()
    .await
}
