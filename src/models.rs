use serde::Serialize;

/// Query string of `GET /api/v1/historical_rates`.
///
/// Every field is optional at the decoding stage so that missing parameters
/// are reported in validation order rather than by the extractor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateQuery {
    pub date: Option<String>,
    pub base_currency: Option<String>,
    pub currency: Option<String>,
}

impl RateQuery {
    /// Builds a query from decoded key/value pairs. The first occurrence of
    /// a repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "date" => &mut query.date,
                "base_currency" => &mut query.base_currency,
                "currency" => &mut query.currency,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateResponse {
    pub date: String,
    pub base_currency: String,
    pub currency: String,
    pub rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_pairs_first_occurrence_wins() {
        let query = RateQuery::from_pairs(pairs(&[
            ("date", "2023-09-25"),
            ("currency", "USD"),
            ("date", "2020-01-01"),
            ("base_currency", "PLN"),
            ("currency", "EUR"),
        ]));
        assert_eq!(
            query,
            RateQuery {
                date: Some("2023-09-25".into()),
                base_currency: Some("PLN".into()),
                currency: Some("USD".into()),
            }
        );
    }

    #[test]
    fn test_from_pairs_keeps_empty_first_value() {
        let query = RateQuery::from_pairs(pairs(&[("date", ""), ("date", "2023-09-25")]));
        assert_eq!(query.date.as_deref(), Some(""));
    }

    #[test]
    fn test_from_pairs_ignores_unknown_keys() {
        let query = RateQuery::from_pairs(pairs(&[("x", "1"), ("Date", "2023-09-25")]));
        assert_eq!(query, RateQuery::default());
    }
}
