// src/lib.rs

pub mod client;
pub mod loader;
pub mod models;

pub use client::{OutputSize, QuoteClient, API_KEY_ENV};
pub use loader::{FinancialStore, DEFAULT_FINANCIALS_PATH};
pub use models::{FinancialRecord, PriceBar, QuoteError, StoreError};
