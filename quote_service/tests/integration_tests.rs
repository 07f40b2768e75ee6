// tests/integration_tests.rs

use chrono::NaiveDate;
use mockito::{mock, Matcher};
use quote_service::client::{OutputSize, QuoteClient};
use quote_service::models::QuoteError;
use std::error::Error;

fn daily_body() -> &'static str {
    r#"
    {
        "Meta Data": {
            "1. Information": "Daily Prices (open, high, low, close) and Volumes",
            "2. Symbol": "MSFT",
            "3. Last Refreshed": "2024-06-14",
            "4. Output Size": "Compact",
            "5. Time Zone": "US/Eastern"
        },
        "Time Series (Daily)": {
            "2024-06-14": {
                "1. open": "445.03",
                "2. high": "448.36",
                "3. low": "442.87",
                "4. close": "442.57",
                "5. volume": "18437977"
            },
            "2024-06-13": {
                "1. open": "440.85",
                "2. high": "443.39",
                "3. low": "439.37",
                "4. close": "441.58",
                "5. volume": "15960250"
            },
            "2024-06-12": {
                "1. open": "435.32",
                "2. high": "443.40",
                "3. low": "433.25",
                "4. close": "441.06",
                "5. volume": "22366185"
            }
        }
    }"#
}

#[tokio::test]
async fn test_daily_fetch_parses_compact_history() -> Result<(), Box<dyn Error>> {
    let _mock = mock("GET", "/query")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("function".into(), "TIME_SERIES_DAILY".into()),
            Matcher::UrlEncoded("symbol".into(), "MSFT".into()),
            Matcher::UrlEncoded("outputsize".into(), "compact".into()),
            Matcher::UrlEncoded("apikey".into(), "demo".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(daily_body())
        .create();

    let client = QuoteClient::new("demo", mockito::server_url());
    let bars = client.daily("MSFT", OutputSize::Compact).await?;

    assert_eq!(bars.len(), 3);
    // Provider keys the map newest-first; the client must hand back ascending dates.
    assert_eq!(bars[0].date, NaiveDate::parse_from_str("2024-06-12", "%Y-%m-%d")?);
    assert_eq!(bars[0].open, 435.32);
    assert_eq!(bars[0].volume, 22366185);
    assert_eq!(bars[2].date, NaiveDate::parse_from_str("2024-06-14", "%Y-%m-%d")?);
    assert_eq!(bars[2].close, 442.57);
    Ok(())
}

// The 0.31 mockito server is global, so each test matches on its own symbol
// to keep parallel tests from answering one another's requests.

#[tokio::test]
async fn test_invalid_ticker_is_a_provider_error() {
    let _mock = mock("GET", "/query")
        .match_query(Matcher::UrlEncoded("symbol".into(), "NOPE".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Error Message": "Invalid API call. Please retry with a valid symbol."}"#)
        .create();

    let client = QuoteClient::new("demo", mockito::server_url());
    let result = client.daily("NOPE", OutputSize::Compact).await;
    assert!(matches!(result, Err(QuoteError::Provider(_))));
}

#[tokio::test]
async fn test_price_history_degrades_to_empty_on_http_failure() {
    let _mock = mock("GET", "/query")
        .match_query(Matcher::UrlEncoded("symbol".into(), "FAIL".into()))
        .with_status(500)
        .create();

    let client = QuoteClient::new("demo", mockito::server_url());
    let bars = client.price_history("FAIL").await;
    assert!(bars.is_empty());
}

#[tokio::test]
async fn test_price_history_degrades_to_empty_on_rate_limit_note() {
    let _mock = mock("GET", "/query")
        .match_query(Matcher::UrlEncoded("symbol".into(), "LIMIT".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"Note": "Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day."}"#)
        .create();

    let client = QuoteClient::new("demo", mockito::server_url());
    let bars = client.price_history("LIMIT").await;
    assert!(bars.is_empty());
}

#[test]
fn test_from_env_requires_the_api_key() {
    // Single test touching the variable, so set/remove cannot race another test.
    std::env::remove_var(quote_service::API_KEY_ENV);
    assert!(matches!(QuoteClient::from_env(), Err(QuoteError::MissingApiKey)));

    std::env::set_var(quote_service::API_KEY_ENV, "demo");
    assert!(QuoteClient::from_env().is_ok());
    std::env::remove_var(quote_service::API_KEY_ENV);
}
