// src/models.rs

use crate::charts::ChartSpec;
use quote_service::{FinancialStore, QuoteClient};
use serde::Serialize;

/// Shared read-only state behind every handler. The store re-reads its file
/// per request and the client is stateless, so nothing here mutates after
/// startup.
pub struct AppState {
    pub store: FinancialStore,
    pub quotes: QuoteClient,
}

/// The four derived metrics, already formatted for display ("N/A" included).
#[derive(Debug, Serialize)]
pub struct KpiSet {
    pub revenue_growth: String,
    pub rd_efficiency: String,
    pub net_margin: String,
    pub stock_change: String,
}

/// Everything the Company tab needs, pushed to the page in one body.
#[derive(Debug, Serialize)]
pub struct CompanyDashboard {
    pub company: String,
    pub ticker: Option<String>,
    pub kpis: KpiSet,
    pub revenue_chart: ChartSpec,
    pub rd_chart: ChartSpec,
    pub net_income_chart: ChartSpec,
    pub stock_chart: ChartSpec,
}

/// Everything the Compare tab needs, likewise one body.
#[derive(Debug, Serialize)]
pub struct CompareDashboard {
    pub leaderboard_chart: ChartSpec,
    pub scatter_chart: ChartSpec,
}
