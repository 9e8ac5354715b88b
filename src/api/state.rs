use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::predictor::Predictor;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded artifacts; read-only for the life of the process
    pub predictor: Arc<Predictor>,

    /// Application start time
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(predictor: Arc<Predictor>) -> Self {
        Self {
            predictor,
            start_time: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.start_time).num_seconds()
    }
}
