use crate::error::AppError;
use crate::models::{RateQuery, RateResponse};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

pub async fn get_historical_rate(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<RateResponse>, AppError> {
    // Delay applies to every request, malformed ones included
    state.rates.simulate_latency().await;

    let query = RateQuery::from_pairs(pairs);

    match state.rates.resolve(&query) {
        Ok(resp) => {
            tracing::info!(
                date = %resp.date,
                base_currency = %resp.base_currency,
                currency = %resp.currency,
                rate = resp.rate,
                "served historical rate"
            );
            Ok(Json(resp))
        }
        Err(e) => {
            tracing::debug!(status = %e.status(), reason = %e, "rate request rejected");
            Err(e)
        }
    }
}
