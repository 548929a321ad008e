#[cfg(test)]
#[path = "../tests/unit/providers_test.rs"]
mod providers_test;

use crate::models::{Coordinate, Located};
use serde::Serialize;

/// An error returned by an external mapping provider. Keeps the provider reported status as is:
/// a non-OK status is surfaced to the user and the triggering operation is aborted, no retries.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("provider request failed with status '{status}'")]
pub struct ProviderError {
    /// A status reported by the provider.
    pub status: String,
}

impl ProviderError {
    /// Creates a new instance of `ProviderError` from given provider status.
    pub fn new(status: impl Into<String>) -> Self {
        Self { status: status.into() }
    }
}

/// Resolves free-text addresses into geocoded positions.
pub trait GeocodingProvider {
    /// Geocodes given free-text address, returning its position or the provider failure status.
    fn geocode(&self, address: &str) -> Result<Coordinate, ProviderError>;
}

/// A request to render turn-by-turn directions along an ordered sequence of stops.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DirectionsRequest {
    /// A tour start position.
    pub origin: Coordinate,
    /// A tour end position.
    pub destination: Coordinate,
    /// Intermediate stops between origin and destination.
    pub waypoints: Vec<Coordinate>,
    /// Whether the provider is allowed to reorder waypoints on its own.
    pub optimize_waypoints: bool,
}

impl DirectionsRequest {
    /// Creates a new instance of `DirectionsRequest` from an ordered tour: the first and the
    /// last stops become origin and destination, the rest become intermediate waypoints in tour
    /// order. Returns `None` for a tour with less than two stops.
    pub fn from_tour<T: Located>(tour: &[T]) -> Option<Self> {
        match tour {
            [origin, waypoints @ .., destination] => Some(Self {
                origin: origin.coordinate(),
                destination: destination.coordinate(),
                waypoints: waypoints.iter().map(|stop| stop.coordinate()).collect(),
                optimize_waypoints: true,
            }),
            _ => None,
        }
    }
}

/// A renderable path returned by a directions provider. Purely presentational: the core never
/// reads anything back from it.
#[derive(Clone, Debug)]
pub struct Directions {
    /// Path points in travel order.
    pub path: Vec<Coordinate>,
}

/// Renders turn-by-turn directions via an external routing service.
pub trait DirectionsProvider {
    /// Requests directions along given stops, returning a renderable path or the provider
    /// failure status.
    fn route(&self, request: &DirectionsRequest) -> Result<Directions, ProviderError>;
}
