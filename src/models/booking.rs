use serde::{Deserialize, Serialize};

use crate::models::location::GeoPoint;
use crate::models::quote::Unavailable;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransportMethod {
    /// Recycler collects the lot from the producer.
    Pickup,
    /// Producer ships the lot to the recycler's chosen point.
    Delivery,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub transport_method: TransportMethod,
    pub estimated_quantity: Option<f64>,
    pub delivery_latitude: Option<f64>,
    pub delivery_longitude: Option<f64>,
}

impl BookingDraft {
    pub fn destination(&self) -> Result<GeoPoint, Unavailable> {
        GeoPoint::from_parts(self.delivery_latitude, self.delivery_longitude)
    }
}
