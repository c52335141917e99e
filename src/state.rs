use crate::service::RateLookupService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub rates: Arc<RateLookupService>,
}

impl AppState {
    pub fn new(rates: RateLookupService) -> Self {
        Self {
            rates: Arc::new(rates),
        }
    }
}
