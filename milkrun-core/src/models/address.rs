use crate::models::{Coordinate, Located};
use serde::{Deserialize, Serialize};

/// Represents a stored address with its geocoded position. Records are immutable once created:
/// the only allowed modification is deletion, owned by the store.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Address {
    /// A unique identifier assigned by the store.
    pub id: i64,
    /// A human readable address label.
    pub address: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Located for Address {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
