//! Historical exchange rate API
//!
//! Serves `GET /api/v1/historical_rates` from a fixed in-memory rate table.
//!
//! # Modules
//! - `config`: listen address resolution from the environment
//! - `error`: API and startup error types
//! - `models`: request and response payloads
//! - `rates`: the in-memory rate table
//! - `service`: query validation and lookup
//! - `state`, `router`, `handlers`: axum wiring

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod rates;
pub mod router;
pub mod service;
pub mod state;

pub use router::create_router;
pub use service::RateLookupService;
pub use state::AppState;
