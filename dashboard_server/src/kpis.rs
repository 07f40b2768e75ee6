// src/kpis.rs

use quote_service::models::{FinancialRecord, PriceBar};

// All calculations expect rows already in quarter order (oldest first) and
// bars in date order. Each returns None instead of dividing by zero or
// reading history that is not there.

/// Quarter-over-quarter revenue growth, percent.
pub fn calculate_revenue_growth(rows: &[FinancialRecord]) -> Option<f64> {
    if rows.len() < 2 {
        return None;
    }
    let latest = rows[rows.len() - 1].revenue;
    let prior = rows[rows.len() - 2].revenue;
    if prior == 0.0 {
        return None;
    }
    Some((latest - prior) / prior * 100.0)
}

/// Revenue generated per unit of R&D spend, latest quarter.
pub fn calculate_rd_efficiency(rows: &[FinancialRecord]) -> Option<f64> {
    let latest = rows.last()?;
    if latest.rd_spending == 0.0 {
        return None;
    }
    Some(latest.revenue / latest.rd_spending)
}

/// Net income as a percentage of revenue, latest quarter.
pub fn calculate_net_margin(rows: &[FinancialRecord]) -> Option<f64> {
    let latest = rows.last()?;
    if latest.revenue == 0.0 {
        return None;
    }
    Some(latest.net_income / latest.revenue * 100.0)
}

/// Close-to-close change across the fetched price window, percent.
pub fn calculate_stock_change(bars: &[PriceBar]) -> Option<f64> {
    if bars.len() < 2 {
        return None;
    }
    let first = bars[0].close;
    let last = bars[bars.len() - 1].close;
    if first == 0.0 {
        return None;
    }
    Some((last - first) / first * 100.0)
}

pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v),
        None => "N/A".to_string(),
    }
}

pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "N/A".to_string(),
    }
}
