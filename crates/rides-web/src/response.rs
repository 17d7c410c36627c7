//! Failure responses
//!
//! Bodies always carry `{error_code, message}`. Only the status line depends on
//! the configured [`StatusMode`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rides_core::RideError;
use tracing::{debug, error};

/// How failures map onto HTTP status codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusMode {
    /// Every outcome is 200; callers tell failures apart by body shape.
    #[default]
    Compatible,
    /// 400 / 404 / 500 by error kind.
    Strict,
}

impl StatusMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Compatible
        }
    }

    pub fn status_for(self, error: &RideError) -> StatusCode {
        match (self, error) {
            (Self::Compatible, _) => StatusCode::OK,
            (Self::Strict, RideError::Validation(_)) => StatusCode::BAD_REQUEST,
            (Self::Strict, RideError::NotFound) => StatusCode::NOT_FOUND,
            (Self::Strict, RideError::Server(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A [`RideError`] on its way out of a handler.
#[derive(Debug)]
pub struct RideFailure {
    error: RideError,
    mode: StatusMode,
}

impl RideFailure {
    pub fn new(error: RideError, mode: StatusMode) -> Self {
        Self { error, mode }
    }

    pub fn error(&self) -> &RideError {
        &self.error
    }
}

impl IntoResponse for RideFailure {
    fn into_response(self) -> Response {
        match &self.error {
            RideError::Server(source) => {
                error!(error = %source, "Storage rejected ride request");
            }
            other => {
                debug!(code = other.code(), message = %other, "Ride request failed");
            }
        }

        let status = self.mode.status_for(&self.error);
        (status, Json(self.error.body())).into_response()
    }
}
