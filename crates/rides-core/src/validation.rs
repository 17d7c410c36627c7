//! Ride payload validation
//!
//! Rules run in a fixed order and stop at the first failure. The payload is the
//! raw request body, so every field may be missing or carry the wrong JSON type;
//! both count as a rule failure.

use crate::ride::{Coordinates, NewRide};
use serde_json::{Map, Value};
use thiserror::Error;

/// The rule a payload failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationRule {
    /// Body was not a JSON object.
    Payload,
    StartCoordinates,
    EndCoordinates,
    RiderName,
    DriverName,
    DriverVehicle,
    /// `limit` / `page` query parameters.
    Pagination,
}

impl ValidationRule {
    pub fn message(self) -> &'static str {
        match self {
            Self::Payload => "Request body must be a JSON object",
            Self::StartCoordinates => {
                "Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively"
            }
            Self::EndCoordinates => {
                "End latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively"
            }
            Self::RiderName => "Rider name must be a non empty string",
            Self::DriverName => "Driver name must be a non empty string",
            Self::DriverVehicle => "Driver vehicle must be a non empty string",
            Self::Pagination => "Limit and page must be positive integers",
        }
    }
}

/// A violated validation rule.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{}", .rule.message())]
pub struct ValidationError {
    pub rule: ValidationRule,
}

impl ValidationError {
    pub fn new(rule: ValidationRule) -> Self {
        Self { rule }
    }

    pub fn message(&self) -> &'static str {
        self.rule.message()
    }
}

impl From<ValidationRule> for ValidationError {
    fn from(rule: ValidationRule) -> Self {
        Self::new(rule)
    }
}

/// Check a raw create payload and turn it into a [`NewRide`].
pub fn validate_new_ride(payload: &Value) -> Result<NewRide, ValidationError> {
    let fields = payload.as_object().ok_or(ValidationRule::Payload)?;

    let start = coordinates(fields, "start_lat", "start_long")
        .ok_or(ValidationRule::StartCoordinates)?;
    let end =
        coordinates(fields, "end_lat", "end_long").ok_or(ValidationRule::EndCoordinates)?;
    let rider_name = non_empty_string(fields, "rider_name").ok_or(ValidationRule::RiderName)?;
    let driver_name = non_empty_string(fields, "driver_name").ok_or(ValidationRule::DriverName)?;
    let driver_vehicle =
        non_empty_string(fields, "driver_vehicle").ok_or(ValidationRule::DriverVehicle)?;

    Ok(NewRide {
        start,
        end,
        rider_name,
        driver_name,
        driver_vehicle,
    })
}

fn coordinates(fields: &Map<String, Value>, lat: &str, long: &str) -> Option<Coordinates> {
    let lat = fields.get(lat)?.as_f64()?;
    let long = fields.get(long)?.as_f64()?;
    Some(Coordinates::new(lat, long)).filter(Coordinates::in_bounds)
}

fn non_empty_string(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)?
        .as_str()
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
