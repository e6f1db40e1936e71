use std::sync::Arc;
use tripdesk_core::repository::TravelRepository;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn TravelRepository>,
}

impl AppState {
    pub fn new(repo: impl TravelRepository + 'static) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }
}
