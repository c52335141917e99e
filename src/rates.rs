//! In-memory rate table
//!
//! Two-level mapping of base currency code to target currency code to rate.
//! Built once at startup and read-only afterwards.

use std::collections::HashMap;
use thiserror::Error;

/// Lookup failures, kept distinct internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("base {base} not found in database")]
    BaseNotFound { base: String },

    #[error("Currency {currency} for base {base} not found in database")]
    CurrencyNotFound { base: String, currency: String },
}

#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<String, HashMap<String, f64>>,
}

impl RateTable {
    pub fn new(rates: HashMap<String, HashMap<String, f64>>) -> Self {
        Self { rates }
    }

    /// The fixed dataset served for 2023-09-25.
    pub fn seeded() -> Self {
        let pln = HashMap::from([
            ("PLN".to_string(), 1.0),
            ("USD".to_string(), 4.3188),
            ("EUR".to_string(), 4.5892),
        ]);
        Self::new(HashMap::from([("PLN".to_string(), pln)]))
    }

    /// Exact, case-sensitive lookup of `base` then `currency`.
    pub fn historical_rate(&self, base: &str, currency: &str) -> Result<f64, LookupError> {
        let base_rates = self
            .rates
            .get(base)
            .ok_or_else(|| LookupError::BaseNotFound {
                base: base.to_string(),
            })?;

        base_rates
            .get(currency)
            .copied()
            .ok_or_else(|| LookupError::CurrencyNotFound {
                base: base.to_string(),
                currency: currency.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rates() {
        let table = RateTable::seeded();
        assert_eq!(table.historical_rate("PLN", "PLN"), Ok(1.0));
        assert_eq!(table.historical_rate("PLN", "USD"), Ok(4.3188));
        assert_eq!(table.historical_rate("PLN", "EUR"), Ok(4.5892));
    }

    #[test]
    fn test_missing_base() {
        let table = RateTable::seeded();
        assert_eq!(
            table.historical_rate("USD", "PLN"),
            Err(LookupError::BaseNotFound { base: "USD".into() })
        );
    }

    #[test]
    fn test_missing_currency() {
        let table = RateTable::seeded();
        let err = table.historical_rate("PLN", "GBP").unwrap_err();
        assert!(matches!(err, LookupError::CurrencyNotFound { .. }));
        assert!(err.to_string().contains("GBP"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = RateTable::seeded();
        assert!(table.historical_rate("pln", "USD").is_err());
        assert!(table.historical_rate("PLN", "usd").is_err());
    }

    #[test]
    fn test_empty_table() {
        let table = RateTable::default();
        assert!(matches!(
            table.historical_rate("PLN", "USD"),
            Err(LookupError::BaseNotFound { .. })
        ));
    }
}
