//! Ride repository
//!
//! Orchestrates validation, parameter binding and storage calls for the three
//! ride operations. Nothing is cached; every read goes back to storage.

use crate::error::{RideError, RideResult};
use crate::ride::Ride;
use crate::storage::{Row, SqlValue, StatementExecutor, StorageError};
use crate::validation::{validate_new_ride, ValidationError, ValidationRule};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

const INSERT_RIDE: &str = "INSERT INTO Rides(startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle) VALUES (?, ?, ?, ?, ?, ?, ?)";
const SELECT_RIDE_BY_ID: &str = "SELECT * FROM Rides WHERE rideID = ?";
const SELECT_RIDES_PAGE: &str = "SELECT * FROM Rides ORDER BY rideID LIMIT ? OFFSET ?";

/// Page selection for listing rides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: i64,
    pub page: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { limit: 10, page: 1 }
    }
}

impl Pagination {
    /// Parse raw `limit` / `page` query values, defaulting absent ones.
    ///
    /// Both must be integers >= 1. There is no upper bound on `limit`.
    pub fn parse(limit: Option<&str>, page: Option<&str>) -> Result<Self, ValidationError> {
        let defaults = Self::default();
        Ok(Self {
            limit: limit.map_or(Ok(defaults.limit), parse_positive)?,
            page: page.map_or(Ok(defaults.page), parse_positive)?,
        })
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

fn parse_positive(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|value| *value >= 1)
        .ok_or_else(|| ValidationError::new(ValidationRule::Pagination))
}

/// Ride operations over an injected [`StatementExecutor`].
#[derive(Clone)]
pub struct RideRepository {
    executor: Arc<dyn StatementExecutor>,
}

impl RideRepository {
    pub fn new(executor: Arc<dyn StatementExecutor>) -> Self {
        Self { executor }
    }

    /// Validate and insert a ride, then read it back by its new id.
    pub async fn create(&self, payload: &Value) -> RideResult<Vec<Ride>> {
        let ride = validate_new_ride(payload)?;

        let ride_id = self.executor.run(INSERT_RIDE, ride.into_params()).await?;
        debug!(ride_id, "Inserted ride");

        let rows = self
            .executor
            .all(SELECT_RIDE_BY_ID, vec![SqlValue::Integer(ride_id)])
            .await?;

        decode_rides(rows)
    }

    /// One page of rides in `rideID` order.
    pub async fn list(&self, pagination: Pagination) -> RideResult<Vec<Ride>> {
        let params = vec![
            SqlValue::Integer(pagination.limit),
            SqlValue::Integer(pagination.offset()),
        ];
        let rows = self.executor.all(SELECT_RIDES_PAGE, params).await?;
        debug!(
            limit = pagination.limit,
            page = pagination.page,
            count = rows.len(),
            "Listed rides"
        );

        non_empty(decode_rides(rows)?)
    }

    /// Rides matching a path identifier. The identifier is bound as text.
    pub async fn get(&self, id: &str) -> RideResult<Vec<Ride>> {
        let rows = self
            .executor
            .all(SELECT_RIDE_BY_ID, vec![SqlValue::from(id)])
            .await?;

        non_empty(decode_rides(rows)?)
    }
}

fn non_empty(rides: Vec<Ride>) -> RideResult<Vec<Ride>> {
    if rides.is_empty() {
        Err(RideError::NotFound)
    } else {
        Ok(rides)
    }
}

fn decode_rides(rows: Vec<Row>) -> RideResult<Vec<Ride>> {
    rows.into_iter()
        .map(|row| {
            serde_json::from_value::<Ride>(Value::Object(row))
                .map_err(|e| RideError::from(StorageError::Deserialization(e.to_string())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageResult;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::json;

    /// Records every statement and answers from canned results.
    #[derive(Default)]
    struct RecordingExecutor {
        calls: Mutex<Vec<(String, Vec<SqlValue>)>>,
        rows: Vec<Row>,
        fail_run: bool,
        fail_all: bool,
    }

    impl RecordingExecutor {
        fn with_rows(rows: Vec<Row>) -> Self {
            Self {
                rows,
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<(String, Vec<SqlValue>)> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl StatementExecutor for RecordingExecutor {
        async fn run(&self, statement: &str, params: Vec<SqlValue>) -> StorageResult<i64> {
            self.calls.lock().push((statement.to_string(), params));
            if self.fail_run {
                return Err(StorageError::Backend("table Rides has no column named x".into()));
            }
            Ok(42)
        }

        async fn all(&self, statement: &str, params: Vec<SqlValue>) -> StorageResult<Vec<Row>> {
            self.calls.lock().push((statement.to_string(), params));
            if self.fail_all {
                return Err(StorageError::Backend("no such column: no_field".into()));
            }
            Ok(self.rows.clone())
        }
    }

    fn ride_row(id: i64) -> Row {
        match json!({
            "rideID": id,
            "startLat": 10.0,
            "startLong": 10.0,
            "endLat": 30.0,
            "endLong": 30.0,
            "riderName": "Test Rider",
            "driverName": "Test Driver",
            "driverVehicle": "Car",
            "created": "2024-03-01 08:15:00"
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn payload() -> Value {
        json!({
            "start_lat": 10,
            "start_long": 10,
            "end_lat": 30,
            "end_long": 30,
            "rider_name": "Test Rider",
            "driver_name": "Test Driver",
            "driver_vehicle": "Car"
        })
    }

    fn repository(executor: &Arc<RecordingExecutor>) -> RideRepository {
        RideRepository::new(executor.clone())
    }

    #[test]
    fn test_pagination_defaults() {
        let pagination = Pagination::parse(None, None).unwrap();
        assert_eq!(pagination, Pagination { limit: 10, page: 1 });
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn test_pagination_offset() {
        let pagination = Pagination::parse(Some("5"), Some("3")).unwrap();
        assert_eq!(pagination.offset(), 10);
    }

    #[test]
    fn test_pagination_rejects_sql_and_junk() {
        for raw in ["1; DELETE FROM Rides WHERE rideID = 1;", "abc", "", "0", "-4", "2.5"] {
            let err = Pagination::parse(Some(raw), None).unwrap_err();
            assert_eq!(err.rule, ValidationRule::Pagination, "limit={raw:?}");
        }
        assert!(Pagination::parse(None, Some("0")).is_err());
    }

    #[test]
    fn test_pagination_has_no_upper_bound() {
        let pagination = Pagination::parse(Some("100000"), None).unwrap();
        assert_eq!(pagination.limit, 100_000);
    }

    #[test]
    fn test_pagination_offset_saturates() {
        let pagination = Pagination {
            limit: i64::MAX,
            page: 3,
        };
        assert_eq!(pagination.offset(), i64::MAX);
    }

    #[tokio::test]
    async fn test_create_inserts_then_selects_new_id() {
        let executor = Arc::new(RecordingExecutor::with_rows(vec![ride_row(42)]));
        let rides = repository(&executor).create(&payload()).await.unwrap();

        assert_eq!(rides.len(), 1);
        assert_eq!(rides[0].ride_id, 42);

        let calls = executor.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, INSERT_RIDE);
        assert_eq!(calls[0].1.len(), 7);
        assert_eq!(calls[1].0, SELECT_RIDE_BY_ID);
        assert_eq!(calls[1].1, vec![SqlValue::Integer(42)]);
    }

    #[tokio::test]
    async fn test_create_validation_failure_skips_storage() {
        let executor = Arc::new(RecordingExecutor::default());
        let mut bad = payload();
        bad["driver_name"] = json!("");

        let err = repository(&executor).create(&bad).await.unwrap_err();

        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.to_string(), "Driver name must be a non empty string");
        assert!(executor.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_insert_failure_is_server_error() {
        let executor = Arc::new(RecordingExecutor {
            fail_run: true,
            ..Default::default()
        });

        let err = repository(&executor).create(&payload()).await.unwrap_err();

        assert_eq!(err.code(), "SERVER_ERROR");
        assert_eq!(err.to_string(), "Unknown error");
        assert_eq!(executor.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_list_binds_limit_and_offset() {
        let executor = Arc::new(RecordingExecutor::with_rows(vec![ride_row(6), ride_row(7)]));
        let rides = repository(&executor)
            .list(Pagination { limit: 5, page: 2 })
            .await
            .unwrap();

        assert_eq!(rides.len(), 2);
        let calls = executor.calls();
        assert_eq!(calls[0].0, SELECT_RIDES_PAGE);
        assert_eq!(calls[0].1, vec![SqlValue::Integer(5), SqlValue::Integer(5)]);
    }

    #[tokio::test]
    async fn test_list_empty_is_not_found() {
        let executor = Arc::new(RecordingExecutor::default());
        let err = repository(&executor)
            .list(Pagination::default())
            .await
            .unwrap_err();

        assert!(matches!(err, RideError::NotFound));
    }

    #[tokio::test]
    async fn test_list_storage_failure_is_server_error() {
        let executor = Arc::new(RecordingExecutor {
            fail_all: true,
            ..Default::default()
        });
        let err = repository(&executor)
            .list(Pagination::default())
            .await
            .unwrap_err();

        assert_eq!(err.code(), "SERVER_ERROR");
    }

    #[tokio::test]
    async fn test_get_binds_identifier_as_text() {
        let executor = Arc::new(RecordingExecutor::default());
        let err = repository(&executor)
            .get("99 OR 1=1;")
            .await
            .unwrap_err();

        assert!(matches!(err, RideError::NotFound));
        assert_eq!(
            executor.calls()[0].1,
            vec![SqlValue::Text("99 OR 1=1;".to_string())]
        );
    }

    #[tokio::test]
    async fn test_undecodable_row_is_server_error() {
        let mut row = ride_row(1);
        row.insert("created".to_string(), Value::Null);
        let executor = Arc::new(RecordingExecutor::with_rows(vec![row]));

        let err = repository(&executor).get("1").await.unwrap_err();

        assert!(matches!(err, RideError::Server(StorageError::Deserialization(_))));
    }
}
