//! Core domain for the rides service
//!
//! This crate holds everything that decides *what* happens to a ride request,
//! independent of HTTP framing or the storage engine in use:
//!
//! - **Ride**: the persisted trip record and the validated [`NewRide`] input
//! - **Validation**: ordered, first-failure-wins rules over a raw JSON payload
//! - **Storage**: the [`StatementExecutor`] seam that backends implement
//! - **Repository**: create / list / get orchestration with the error taxonomy
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rides_core::{Pagination, RideRepository};
//!
//! let repository = RideRepository::new(executor);
//! let created = repository.create(&payload).await?;
//! let page = repository.list(Pagination::default()).await?;
//! ```

pub mod error;
pub mod repository;
pub mod ride;
pub mod storage;
pub mod validation;

// Re-exports
pub use error::{ErrorBody, RideError, RideResult};
pub use repository::{Pagination, RideRepository};
pub use ride::{Coordinates, NewRide, Ride};
pub use storage::{Row, SqlValue, StatementExecutor, StorageError, StorageResult};
pub use validation::{validate_new_ride, ValidationError, ValidationRule};
