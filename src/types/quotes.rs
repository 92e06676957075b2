use serde::{Deserialize, Serialize};

/// Cheapest flight found for a query, already formatted for display.
///
/// Fields the provider left out degrade to `"N/A"` (or the requested airport
/// code) instead of failing the whole search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightQuote {
    pub departure_airport: String,
    pub arrival_airport: String,
    /// e.g. "2h 5min"
    pub total_duration: String,
    /// e.g. "USD 432 (per person)"
    pub price: String,
    pub airline: String,
    /// "Direct" or the provider's stop description
    pub stops: String,
}

/// Result of a flight search. An empty result is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlightSearchOutcome {
    Found(FlightQuote),
    NoFlights,
}

/// Live exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyRate {
    pub base: String,
    pub target: String,
    pub rate: f64,
}

impl CurrencyRate {
    /// Sentence quoted back to the client and fed into plan prompts.
    pub fn message(&self) -> String {
        format!(
            "1 {} is approximately {:.3} {}.",
            self.base, self.rate, self.target
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_message_uses_three_decimals() {
        let rate = CurrencyRate {
            base: "USD".into(),
            target: "INR".into(),
            rate: 83.12345,
        };
        assert_eq!(rate.message(), "1 USD is approximately 83.123 INR.");

        let whole = CurrencyRate {
            base: "EUR".into(),
            target: "USD".into(),
            rate: 1.0,
        };
        assert_eq!(whole.message(), "1 EUR is approximately 1.000 USD.");
    }
}
