use crate::observability::metrics::Metrics;

pub struct AppState {
    pub metrics: Metrics,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            metrics: Metrics::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
