// src/handlers.rs

use crate::charts;
use crate::config;
use crate::kpis;
use crate::models::{AppState, CompanyDashboard, CompareDashboard, KpiSet};
use crate::quarters::sorted_by_quarter;
use actix_web::{get, web, HttpResponse, Responder};

#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../static/index.html"))
}

#[get("/api/companies")]
pub async fn companies(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.store.companies())
}

// One request builds the whole Company view: financials, price history, the
// four KPIs, and the four charts. A single JSON body keeps the page update
// atomic; every fallible step below has already degraded to an empty shape
// or "N/A" by the time it lands here.
#[get("/api/company/{company}")]
pub async fn company_dashboard(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let company = path.into_inner();
    let rows = sorted_by_quarter(state.store.financials(&company));

    let ticker = config::ticker_for(&company);
    let bars = match ticker {
        Some(ticker) => state.quotes.price_history(ticker).await,
        None => {
            log::warn!("no ticker registered for company {:?}", company);
            Vec::new()
        }
    };

    let kpis = KpiSet {
        revenue_growth: kpis::format_percent(kpis::calculate_revenue_growth(&rows)),
        rd_efficiency: kpis::format_ratio(kpis::calculate_rd_efficiency(&rows)),
        net_margin: kpis::format_percent(kpis::calculate_net_margin(&rows)),
        stock_change: kpis::format_percent(kpis::calculate_stock_change(&bars)),
    };

    HttpResponse::Ok().json(CompanyDashboard {
        revenue_chart: charts::revenue_chart(&rows, &company),
        rd_chart: charts::rd_chart(&rows, &company),
        net_income_chart: charts::net_income_chart(&rows, &company),
        stock_chart: charts::stock_chart(&bars, &company, ticker.unwrap_or("?")),
        kpis,
        ticker: ticker.map(str::to_string),
        company,
    })
}

// Recomputed on every request; the page refetches whenever the Compare tab
// becomes active.
#[get("/api/compare")]
pub async fn compare_dashboard(state: web::Data<AppState>) -> impl Responder {
    let rows = state.store.all_financials();
    HttpResponse::Ok().json(CompareDashboard {
        leaderboard_chart: charts::leaderboard_chart(&rows),
        scatter_chart: charts::scatter_efficiency_chart(&rows),
    })
}
