#[cfg(test)]
#[path = "../tests/unit/api_test.rs"]
mod api_test;

use crate::store::{AddressStore, StoreError};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use milkrun_core::algorithms::geo::get_distance;
use milkrun_core::construction::tour::{create_tour, get_tour_distance};
use milkrun_core::models::{Address, Distance, Located};
use milkrun_core::providers::DirectionsRequest;
use serde::{Deserialize, Serialize};

/// A state shared by all handlers. Handlers receive it explicitly: there is no ambient state.
#[derive(Clone)]
pub struct AppState {
    /// An underlying address store.
    pub store: AddressStore,
}

/// Creates a router which exposes the address CRUD and tour planning operations.
pub fn create_router(store: AddressStore) -> Router {
    Router::new()
        .route("/addresses", post(create_address).get(list_addresses).delete(clear_addresses))
        .route("/addresses/:id", delete(delete_address))
        .route("/tour", get(get_tour))
        .with_state(AppState { store })
}

/// An error of an API operation mapped onto a response status: rejected user input becomes a
/// client error, a storage failure becomes a server fault.
#[derive(Debug)]
enum ApiError {
    /// Rejected user input with an explanation.
    Validation(String),
    /// An underlying storage failure.
    Storage(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::EmptyAddress => Self::Validation(error.to_string()),
            error => Self::Storage(error),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::Storage(error) => {
                log::error!("storage failure: {error}");
                (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
            }
        }
    }
}

/// A payload to create a new address with its geocoded position.
#[derive(Debug, Deserialize)]
pub struct AddressPayload {
    /// A free-form address label.
    pub address: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// A response to a successful address creation.
#[derive(Debug, Serialize)]
pub struct CreatedAddress {
    /// An assigned unique id.
    pub id: i64,
}

/// A single leg of a planned tour.
#[derive(Debug, Serialize)]
pub struct TourLeg {
    /// An id of the leg start address.
    pub from_id: i64,
    /// An id of the leg end address.
    pub to_id: i64,
    /// Great-circle length of the leg in kilometers.
    pub distance: Distance,
}

/// A visiting order over all stored addresses with great-circle distance estimates and the
/// request an external directions provider would receive to render the actual driving route.
#[derive(Debug, Serialize)]
pub struct TourPlan {
    /// Addresses in visiting order.
    pub stops: Vec<Address>,
    /// Great-circle legs between consecutive stops.
    pub legs: Vec<TourLeg>,
    /// Total great-circle length of the tour in kilometers.
    pub total_distance: Distance,
    /// A request for an external routing provider.
    pub directions: DirectionsRequest,
}

async fn create_address(
    State(state): State<AppState>,
    Json(payload): Json<AddressPayload>,
) -> Result<Json<CreatedAddress>, ApiError> {
    let id = state.store.add(&payload.address, payload.latitude, payload.longitude)?;
    log::info!("added address '{}' with id {id}", payload.address);

    Ok(Json(CreatedAddress { id }))
}

async fn list_addresses(State(state): State<AppState>) -> Result<Json<Vec<Address>>, ApiError> {
    Ok(Json(state.store.list_all()?))
}

async fn clear_addresses(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.store.clear_all()?;
    log::info!("removed all addresses");

    Ok(StatusCode::OK)
}

async fn delete_address(State(state): State<AppState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    state.store.delete_by_id(id)?;
    log::info!("removed address with id {id}");

    Ok(StatusCode::OK)
}

async fn get_tour(State(state): State<AppState>) -> Result<Json<TourPlan>, ApiError> {
    let stops = create_tour(state.store.list_all()?);

    let directions = DirectionsRequest::from_tour(&stops)
        .ok_or_else(|| ApiError::Validation("at least two addresses are required".to_string()))?;

    let legs = stops
        .windows(2)
        .map(|leg| TourLeg {
            from_id: leg[0].id,
            to_id: leg[1].id,
            distance: get_distance(&leg[0].coordinate(), &leg[1].coordinate()),
        })
        .collect();
    let total_distance = get_tour_distance(&stops);

    Ok(Json(TourPlan { stops, legs, total_distance, directions }))
}
