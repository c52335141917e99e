//! Rate lookup service
//!
//! Validates a rate query and resolves it against the in-memory table.
//! Checks run in a fixed order and the first failure wins:
//! date present, date parses, date is the database date, base present,
//! currency present, pair exists.

use crate::error::AppError;
use crate::models::{RateQuery, RateResponse};
use crate::rates::RateTable;
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use std::time::Duration;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The only date the table holds rates for (year, month, day).
pub const DATABASE_DATE: (i32, u32, u32) = (2023, 9, 25);

/// Artificial handling delay window, in milliseconds (upper bound exclusive).
pub const LATENCY_MIN_MS: u64 = 200;
pub const LATENCY_MAX_MS: u64 = 300;

pub struct RateLookupService {
    table: RateTable,
}

impl RateLookupService {
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }

    pub fn seeded() -> Self {
        Self::new(RateTable::seeded())
    }

    /// Sleeps for a uniformly random duration in [200ms, 300ms).
    pub async fn simulate_latency(&self) {
        tokio::time::sleep(random_latency()).await;
    }

    pub fn resolve(&self, query: &RateQuery) -> Result<RateResponse, AppError> {
        let raw_date = non_empty(&query.date).ok_or_else(|| {
            AppError::InvalidRequest("Please provide date query param (date=YYYY-MM-DD).".into())
        })?;

        let date = parse_date(raw_date)
            .ok_or_else(|| AppError::InvalidRequest("Incorrect date value.".into()))?;
        let date_str = date.format(DATE_FORMAT).to_string();

        if (date.year(), date.month(), date.day()) != DATABASE_DATE {
            return Err(AppError::NotFound(format!(
                "Date {} not found in database.",
                date_str
            )));
        }

        let base_currency = non_empty(&query.base_currency).ok_or_else(|| {
            AppError::InvalidRequest("Please provide base_currency query parameter.".into())
        })?;

        let currency = non_empty(&query.currency).ok_or_else(|| {
            AppError::InvalidRequest("Please provide currency query parameter.".into())
        })?;

        // Base and pair misses report the same message.
        let rate = self
            .table
            .historical_rate(base_currency, currency)
            .map_err(|e| {
                tracing::debug!(error = %e, "rate lookup failed");
                AppError::NotFound(format!(
                    "Pair of currencies {} and {} not found in database.",
                    base_currency, currency
                ))
            })?;

        Ok(RateResponse {
            date: date_str,
            base_currency: base_currency.to_string(),
            currency: currency.to_string(),
            rate,
        })
    }
}

pub fn random_latency() -> Duration {
    let ms = rand::thread_rng().gen_range(LATENCY_MIN_MS..LATENCY_MAX_MS);
    Duration::from_millis(ms)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Parses a strict `YYYY-MM-DD` calendar date.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let well_shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_shaped {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}
