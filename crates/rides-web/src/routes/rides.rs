//! Ride endpoints

use crate::state::AppState;
use crate::RideFailure;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use rides_core::{Pagination, Ride, RideError, ValidationError, ValidationRule};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

pub fn ride_routes() -> Router<AppState> {
    Router::new()
        .route("/rides", get(list_rides).post(create_ride))
        .route("/rides/{id}", get(get_ride))
}

async fn create_ride(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Vec<Ride>>, RideFailure> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!(%rejection, "Undecodable ride payload");
        state.failure(ValidationError::new(ValidationRule::Payload))
    })?;

    let rides = state
        .rides
        .create(&payload)
        .await
        .map_err(|e| state.failure(e))?;

    Ok(Json(rides))
}

/// Raw values so malformed numbers surface as a validation failure.
#[derive(Debug, Deserialize)]
struct ListRidesQuery {
    limit: Option<String>,
    page: Option<String>,
}

async fn list_rides(
    State(state): State<AppState>,
    query: Result<Query<ListRidesQuery>, QueryRejection>,
) -> Result<Json<Vec<Ride>>, RideFailure> {
    let Query(query) = query.map_err(|rejection| {
        debug!(%rejection, "Undecodable ride query");
        state.failure(ValidationError::new(ValidationRule::Pagination))
    })?;

    let pagination = Pagination::parse(query.limit.as_deref(), query.page.as_deref())
        .map_err(|e| state.failure(e))?;

    let rides = state
        .rides
        .list(pagination)
        .await
        .map_err(|e| state.failure(e))?;

    Ok(Json(rides))
}

async fn get_ride(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Ride>>, RideFailure> {
    // An id that is not valid UTF-8 cannot match a stored row.
    let Path(id) = id.map_err(|rejection| {
        debug!(%rejection, "Undecodable ride id");
        state.failure(RideError::NotFound)
    })?;

    let rides = state.rides.get(&id).await.map_err(|e| state.failure(e))?;

    Ok(Json(rides))
}
