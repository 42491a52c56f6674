use serde::{Deserialize, Serialize};

use crate::models::location::GeoPoint;
use crate::models::quote::Unavailable;

/// The slice of a backend waste record the estimator reads. `price` covers
/// the whole lot; zero means the producer gives it away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WasteListing {
    pub id: i64,
    pub weight: f64,
    #[serde(default)]
    pub price: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl WasteListing {
    pub fn origin(&self) -> Result<GeoPoint, Unavailable> {
        GeoPoint::from_parts(self.latitude, self.longitude)
    }
}
