// src/models.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use validator::Validate;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Alpha Vantage API key not found. Please set ALPHA_VANTAGE_API_KEY.")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider rejected the request: {0}")]
    Provider(String),
    #[error("invalid date in provider response: {0}")]
    InvalidDate(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read financial source: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse financial source: {0}")]
    Csv(#[from] csv::Error),
}

// One quarterly row of the financials CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FinancialRecord {
    #[serde(rename = "Company")]
    #[validate(length(min = 1, max = 100))]
    pub company: String,
    #[serde(rename = "Ticker")]
    #[validate(length(min = 1, max = 5))]
    pub ticker: String,
    #[serde(rename = "Quarter")]
    #[validate(length(min = 1, max = 20))]
    pub quarter: String,
    #[serde(rename = "Revenue")]
    pub revenue: f64,
    #[serde(rename = "RD_Spending")]
    pub rd_spending: f64,
    #[serde(rename = "Net_Income")]
    pub net_income: f64,
}

// One normalized daily OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

// Custom function to convert a JSON string to f64
fn string_to_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<f64>().map_err(serde::de::Error::custom)
}

// Custom function to convert a JSON string to i64
fn string_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<i64>().map_err(serde::de::Error::custom)
}

// Struct for the Meta Data block of the daily time series response
#[derive(Debug, Deserialize)]
pub struct MetaData {
    #[serde(rename = "1. Information")]
    pub information: String,

    #[serde(rename = "2. Symbol")]
    pub symbol: String,

    #[serde(rename = "3. Last Refreshed")]
    pub last_refreshed: String,

    #[serde(rename = "4. Output Size")]
    pub output_size: String,

    #[serde(rename = "5. Time Zone")]
    pub time_zone: String,
}

// Struct for the stock prices for each date
#[derive(Debug, Deserialize)]
pub struct TimeSeriesData {
    #[serde(rename = "1. open", deserialize_with = "string_to_f64")]
    pub open: f64,

    #[serde(rename = "2. high", deserialize_with = "string_to_f64")]
    pub high: f64,

    #[serde(rename = "3. low", deserialize_with = "string_to_f64")]
    pub low: f64,

    #[serde(rename = "4. close", deserialize_with = "string_to_f64")]
    pub close: f64,

    #[serde(rename = "5. volume", deserialize_with = "string_to_i64")]
    pub volume: i64,
}

// Struct for the overall daily response. The provider also returns plain
// {"Error Message": ...} or {"Note": ...} bodies on bad tickers and rate
// limits, so every field stays optional and the client inspects what arrived.
#[derive(Debug, Deserialize)]
pub struct DailySeriesResponse {
    #[serde(rename = "Meta Data")]
    pub meta_data: Option<MetaData>,

    #[serde(rename = "Time Series (Daily)")]
    pub daily_time_series: Option<HashMap<String, TimeSeriesData>>, // Date -> TimeSeriesData

    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,

    #[serde(rename = "Note")]
    pub note: Option<String>,
}

impl DailySeriesResponse {
    /// Flatten the date-keyed map into bars sorted by date ascending.
    pub fn into_bars(self) -> Result<Vec<PriceBar>, QuoteError> {
        if let Some(msg) = self.error_message {
            return Err(QuoteError::Provider(msg));
        }
        if let Some(note) = self.note {
            return Err(QuoteError::Provider(note));
        }
        let series = self
            .daily_time_series
            .ok_or_else(|| QuoteError::Provider("response carried no time series".to_string()))?;

        let mut bars = Vec::with_capacity(series.len());
        for (date_str, data) in series {
            let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                .map_err(|_| QuoteError::InvalidDate(date_str.clone()))?;
            bars.push(PriceBar {
                date,
                open: data.open,
                high: data.high,
                low: data.low,
                close: data.close,
                volume: data.volume,
            });
        }
        bars.sort_by_key(|bar| bar.date);
        Ok(bars)
    }
}
