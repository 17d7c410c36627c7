//! Ride records

use crate::storage::SqlValue;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub long: f64,
}

impl Coordinates {
    pub const LAT_RANGE: (f64, f64) = (-90.0, 90.0);
    pub const LONG_RANGE: (f64, f64) = (-180.0, 180.0);

    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }

    /// Both components lie inside their inclusive ranges.
    pub fn in_bounds(&self) -> bool {
        let (min_lat, max_lat) = Self::LAT_RANGE;
        let (min_long, max_long) = Self::LONG_RANGE;
        (min_lat..=max_lat).contains(&self.lat) && (min_long..=max_long).contains(&self.long)
    }
}

/// A ride that passed validation and is ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRide {
    pub start: Coordinates,
    pub end: Coordinates,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
}

impl NewRide {
    /// Values in the column order of the insert statement.
    pub fn into_params(self) -> Vec<SqlValue> {
        vec![
            self.start.lat.into(),
            self.start.long.into(),
            self.end.lat.into(),
            self.end.long.into(),
            self.rider_name.into(),
            self.driver_name.into(),
            self.driver_vehicle.into(),
        ]
    }
}

/// A persisted ride, serialized with the column names of the `Rides` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ride {
    #[serde(rename = "rideID")]
    pub ride_id: i64,
    #[serde(rename = "startLat")]
    pub start_lat: f64,
    #[serde(rename = "startLong")]
    pub start_long: f64,
    #[serde(rename = "endLat")]
    pub end_lat: f64,
    #[serde(rename = "endLong")]
    pub end_long: f64,
    #[serde(rename = "riderName")]
    pub rider_name: String,
    #[serde(rename = "driverName")]
    pub driver_name: String,
    #[serde(rename = "driverVehicle")]
    pub driver_vehicle: String,
    #[serde(with = "sqlite_timestamp")]
    pub created: NaiveDateTime,
}

/// `CURRENT_TIMESTAMP` text form, e.g. `2024-03-01 08:15:00`.
mod sqlite_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
