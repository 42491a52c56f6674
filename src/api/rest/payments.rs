use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::Json;
use axum::Router;
use serde::Deserialize;
use tracing::{info, warn};

use crate::engine::payment::build_submission;
use crate::engine::pricing::quote_booking;
use crate::error::{AppError, QuoteError};
use crate::models::booking::BookingDraft;
use crate::models::payment::{PaymentMethod, PaymentSubmission};
use crate::models::waste::WasteListing;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/payments/draft", post(draft_payment))
}

#[derive(Deserialize)]
pub struct DraftPaymentRequest {
    pub waste: WasteListing,
    pub booking: BookingDraft,
    pub payment_method: PaymentMethod,
    pub payment_proof_url: String,
}

async fn draft_payment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<DraftPaymentRequest>,
) -> Result<Json<PaymentSubmission>, AppError> {
    let submission = quote_booking(&payload.waste, &payload.booking).and_then(|breakdown| {
        build_submission(
            payload.payment_method,
            &payload.payment_proof_url,
            &breakdown,
        )
    });

    match submission {
        Ok(submission) => {
            state
                .metrics
                .payment_drafts_total
                .with_label_values(&["accepted"])
                .inc();
            info!(
                waste_id = payload.waste.id,
                method = ?submission.payment_method,
                total_amount = submission.total_amount,
                "payment draft built"
            );
            Ok(Json(submission))
        }
        Err(err) => {
            let outcome = match &err {
                QuoteError::Unavailable(_) => "unavailable",
                _ => "rejected",
            };
            state
                .metrics
                .payment_drafts_total
                .with_label_values(&[outcome])
                .inc();
            warn!(waste_id = payload.waste.id, error = %err, "payment draft refused");
            Err(err.into())
        }
    }
}
