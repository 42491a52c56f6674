use serde::{Deserialize, Serialize};

use crate::models::quote::Unavailable;

/// A resolved WGS84 position in degrees. Both coordinates are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Builds a point from coordinates as they arrive from backend records,
    /// where either field may be absent or hold garbage.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Result<Self, Unavailable> {
        let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
            return Err(Unavailable::MissingCoordinate);
        };

        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(Unavailable::NonFiniteInput);
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// A point picked on a map or read off a listing, possibly incomplete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialPoint {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl PartialPoint {
    pub fn resolve(&self) -> Result<GeoPoint, Unavailable> {
        GeoPoint::from_parts(self.latitude, self.longitude)
    }
}
