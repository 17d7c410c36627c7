use crate::response::{RideFailure, StatusMode};
use rides_core::{RideError, RideRepository};

#[derive(Clone)]
pub struct AppState {
    pub rides: RideRepository,
    pub status_mode: StatusMode,
}

impl AppState {
    pub fn new(rides: RideRepository, status_mode: StatusMode) -> Self {
        Self { rides, status_mode }
    }

    pub fn failure(&self, error: impl Into<RideError>) -> RideFailure {
        RideFailure::new(error.into(), self.status_mode)
    }
}
