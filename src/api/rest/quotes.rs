use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::engine::pricing::quote_booking;
use crate::engine::shipping::shipping_cost;
use crate::error::AppError;
use crate::geo::route_distance_km;
use crate::models::booking::BookingDraft;
use crate::models::location::PartialPoint;
use crate::models::quote::{Quote, Unavailable};
use crate::models::waste::WasteListing;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/quotes", post(create_quote))
        .route("/distance", post(estimate_distance))
}

#[derive(Deserialize)]
pub struct CreateQuoteRequest {
    pub waste: WasteListing,
    pub booking: BookingDraft,
}

#[derive(Deserialize)]
pub struct DistanceRequest {
    #[serde(default)]
    pub origin: PartialPoint,
    #[serde(default)]
    pub destination: PartialPoint,
}

#[derive(Serialize)]
pub struct DistanceResponse {
    pub distance_km: Option<f64>,
    pub shipping_cost: Option<u64>,
    pub unavailable_reason: Option<Unavailable>,
}

async fn create_quote(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateQuoteRequest>,
) -> Result<Json<Quote>, AppError> {
    let breakdown = quote_booking(&payload.waste, &payload.booking).inspect_err(|err| {
        state
            .metrics
            .quotes_total
            .with_label_values(&["rejected"])
            .inc();
        warn!(waste_id = payload.waste.id, error = %err, "quote rejected");
    })?;

    state
        .metrics
        .observe_quote(payload.booking.transport_method, &breakdown);

    match breakdown.unavailable_reason {
        Some(reason) => info!(
            waste_id = payload.waste.id,
            reason = ?reason,
            "shipping cost not computable"
        ),
        None => info!(
            waste_id = payload.waste.id,
            transport = ?payload.booking.transport_method,
            total_amount = ?breakdown.total_amount,
            "quote computed"
        ),
    }

    Ok(Json(Quote::new(breakdown)))
}

async fn estimate_distance(Json(payload): Json<DistanceRequest>) -> Json<DistanceResponse> {
    let origin = payload.origin.resolve();
    let destination = payload.destination.resolve();
    let distance_km = route_distance_km(origin.ok(), destination.ok());

    Json(DistanceResponse {
        distance_km,
        shipping_cost: shipping_cost(distance_km),
        unavailable_reason: origin.and(destination).err(),
    })
}
