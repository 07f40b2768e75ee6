// src/quarters.rs

use quote_service::models::FinancialRecord;
use std::cmp::Ordering;

/// Parse a "Qn YYYY" label into a chronological key.
pub fn quarter_key(label: &str) -> Option<(i32, u8)> {
    let rest = label.strip_prefix('Q')?;
    let (quarter, year) = rest.trim().split_once(' ')?;
    let quarter: u8 = quarter.trim().parse().ok()?;
    if !(1..=4).contains(&quarter) {
        return None;
    }
    let year: i32 = year.trim().parse().ok()?;
    Some((year, quarter))
}

/// Chronological order where both labels parse, lexicographic otherwise.
pub fn compare_quarters(a: &str, b: &str) -> Ordering {
    match (quarter_key(a), quarter_key(b)) {
        (Some(ka), Some(kb)) => ka.cmp(&kb),
        _ => a.cmp(b),
    }
}

/// Rows in quarter order, oldest first. Stable, so duplicate labels keep
/// their source order.
pub fn sorted_by_quarter(mut rows: Vec<FinancialRecord>) -> Vec<FinancialRecord> {
    rows.sort_by(|a, b| compare_quarters(&a.quarter, &b.quarter));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(quarter: &str) -> FinancialRecord {
        FinancialRecord {
            company: "Apple".to_string(),
            ticker: "AAPL".to_string(),
            quarter: quarter.to_string(),
            revenue: 1.0,
            rd_spending: 1.0,
            net_income: 1.0,
        }
    }

    #[test]
    fn test_quarter_key_parses_standard_labels() {
        assert_eq!(quarter_key("Q1 2024"), Some((2024, 1)));
        assert_eq!(quarter_key("Q4 2023"), Some((2023, 4)));
        assert_eq!(quarter_key("Q5 2024"), None);
        assert_eq!(quarter_key("FY 2024"), None);
    }

    #[test]
    fn test_chronological_beats_lexicographic() {
        // Lexicographically "Q2 2023" > "Q1 2024"; chronologically it is earlier.
        assert_eq!(compare_quarters("Q2 2023", "Q1 2024"), Ordering::Less);
        assert_eq!(compare_quarters("Q4 2024", "Q1 2024"), Ordering::Greater);
    }

    #[test]
    fn test_sorted_by_quarter() {
        let rows = vec![record("Q1 2024"), record("Q4 2023"), record("Q2 2024")];
        let sorted = sorted_by_quarter(rows);
        let labels: Vec<&str> = sorted.iter().map(|r| r.quarter.as_str()).collect();
        assert_eq!(labels, vec!["Q4 2023", "Q1 2024", "Q2 2024"]);
    }

    #[test]
    fn test_unparseable_labels_fall_back_to_lexicographic() {
        assert_eq!(compare_quarters("2023-Q4", "2024-Q1"), Ordering::Less);
    }
}
