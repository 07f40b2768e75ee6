// src/loader.rs

use crate::models::{FinancialRecord, StoreError};
use std::fs::File;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Default relative location of the financial source file.
pub const DEFAULT_FINANCIALS_PATH: &str = "data/financials.csv";

/// Read-only view over the quarterly financials CSV.
///
/// Every accessor re-reads the file, so edits to the source show up on the
/// next request without a restart. Read or parse failures degrade to an
/// empty result and a logged warning; callers always get something
/// renderable.
#[derive(Debug, Clone)]
pub struct FinancialStore {
    path: PathBuf,
}

impl FinancialStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FinancialStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Distinct company names, in file order.
    pub fn companies(&self) -> Vec<String> {
        let records = self.read_or_warn("loading companies");
        let mut companies: Vec<String> = Vec::new();
        for record in records {
            if !companies.contains(&record.company) {
                companies.push(record.company);
            }
        }
        companies
    }

    /// All rows for one company, in file order.
    pub fn financials(&self, company: &str) -> Vec<FinancialRecord> {
        let mut records = self.read_or_warn("loading financials");
        records.retain(|record| record.company == company);
        records
    }

    /// Every row in the source.
    pub fn all_financials(&self) -> Vec<FinancialRecord> {
        self.read_or_warn("loading all financials")
    }

    fn read_or_warn(&self, context: &str) -> Vec<FinancialRecord> {
        match self.read_records() {
            Ok(records) => records,
            Err(err) => {
                log::warn!("error {} from {}: {}", context, self.path.display(), err);
                Vec::new()
            }
        }
    }

    fn read_records(&self) -> Result<Vec<FinancialRecord>, StoreError> {
        let file = File::open(&self.path)?;
        let mut reader = csv::Reader::from_reader(file);
        let mut records = Vec::new();
        for (line, result) in reader.deserialize::<FinancialRecord>().enumerate() {
            let record = result?;
            if let Err(err) = record.validate() {
                log::warn!(
                    "skipping invalid row {} in {}: {}",
                    line + 2, // header is line 1
                    self.path.display(),
                    err
                );
                continue;
            }
            records.push(record);
        }
        Ok(records)
    }
}

impl Default for FinancialStore {
    fn default() -> Self {
        FinancialStore::new(DEFAULT_FINANCIALS_PATH)
    }
}
