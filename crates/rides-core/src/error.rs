//! Ride request error taxonomy
//!
//! Every failure leaving the repository is one of three kinds, each with a
//! stable `error_code`. Storage detail is kept on the error for operator logs
//! but never appears in the public message.

use crate::storage::StorageError;
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const RIDES_NOT_FOUND_ERROR: &str = "RIDES_NOT_FOUND_ERROR";
pub const SERVER_ERROR: &str = "SERVER_ERROR";

/// Ride request error type
#[derive(Error, Debug)]
pub enum RideError {
    /// Input failed a domain rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A read matched zero rows
    #[error("Could not find any rides")]
    NotFound,

    /// The storage engine rejected a statement
    #[error("Unknown error")]
    Server(#[source] StorageError),
}

/// Result type for ride operations
pub type RideResult<T> = Result<T, RideError>;

impl From<StorageError> for RideError {
    fn from(err: StorageError) -> Self {
        Self::Server(err)
    }
}

impl RideError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => VALIDATION_ERROR,
            Self::NotFound => RIDES_NOT_FOUND_ERROR,
            Self::Server(_) => SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error_code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

/// Wire shape of a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error_code: String,
    pub message: String,
}
