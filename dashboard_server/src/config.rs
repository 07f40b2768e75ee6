// src/config.rs

/// Companies tracked on the dashboard.
pub const COMPANIES: [&str; 6] = ["Apple", "Microsoft", "Google", "Amazon", "Tesla", "Meta"];

/// Static company-name to ticker-symbol mapping. Only registry companies are
/// selectable in the UI; anything else arriving over raw HTTP gets `None`.
pub fn ticker_for(company: &str) -> Option<&'static str> {
    match company {
        "Apple" => Some("AAPL"),
        "Microsoft" => Some("MSFT"),
        "Google" => Some("GOOGL"),
        "Amazon" => Some("AMZN"),
        "Tesla" => Some("TSLA"),
        "Meta" => Some("META"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tracked_company_has_a_ticker() {
        for company in COMPANIES {
            assert!(ticker_for(company).is_some(), "no ticker for {}", company);
        }
    }

    #[test]
    fn test_unknown_company_has_no_ticker() {
        assert_eq!(ticker_for("Netflix"), None);
        assert_eq!(ticker_for(""), None);
    }
}
