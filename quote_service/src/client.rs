// src/client.rs

use crate::models::{DailySeriesResponse, PriceBar, QuoteError};
use std::time::Duration;

/// Environment variable holding the provider credential.
pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";

const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// How much history to request from the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSize {
    /// Most recent ~100 daily bars.
    Compact,
    /// Full available history.
    Full,
}

impl OutputSize {
    fn as_str(self) -> &'static str {
        match self {
            OutputSize::Compact => "compact",
            OutputSize::Full => "full",
        }
    }
}

/// Authenticated client for the daily stock-quote endpoint.
///
/// Built once at startup; a missing API key is a fatal configuration error
/// here, never a per-call surprise.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl QuoteClient {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        QuoteClient {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Read the credential from the environment and point at the real provider.
    pub fn from_env() -> Result<Self, QuoteError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| QuoteError::MissingApiKey)?;
        if api_key.is_empty() {
            return Err(QuoteError::MissingApiKey);
        }
        Ok(QuoteClient::new(api_key, DEFAULT_BASE_URL))
    }

    /// Fetch daily OHLCV bars for a ticker, sorted by date ascending.
    pub async fn daily(&self, ticker: &str, size: OutputSize) -> Result<Vec<PriceBar>, QuoteError> {
        let url = format!(
            "{}/query?function=TIME_SERIES_DAILY&symbol={}&outputsize={}&apikey={}",
            self.base_url,
            ticker,
            size.as_str(),
            self.api_key
        );
        let response = self.http.get(&url).send().await?;
        let response = response.error_for_status()?;
        let payload: DailySeriesResponse = response.json().await?;
        payload.into_bars()
    }

    /// Fail-quiet wrapper used by the dashboard: any failure becomes an empty
    /// history plus a logged warning, so rendering never sees an error.
    pub async fn price_history(&self, ticker: &str) -> Vec<PriceBar> {
        match self.daily(ticker, OutputSize::Compact).await {
            Ok(bars) => bars,
            Err(err) => {
                log::warn!("error fetching stock data for {}: {}", ticker, err);
                Vec::new()
            }
        }
    }
}
