use serde::{Deserialize, Serialize};

/// Represents a distance in kilometers.
pub type Distance = f64;

/// Represents a geocoded position with latitude and longitude in degrees.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
pub struct Coordinate {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Provides access to a geocoded position of an entity.
pub trait Located {
    /// Returns position of the entity.
    fn coordinate(&self) -> Coordinate;
}

impl Located for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}
