use crate::error::QuoteError;
use crate::models::payment::{PaymentMethod, PaymentSubmission};
use crate::models::quote::{CostBreakdown, Unavailable};

/// Turns a cost preview into the payment payload. Refuses while any amount
/// is still unknown so an unpriced delivery is never submitted as free.
pub fn build_submission(
    method: PaymentMethod,
    proof_url: &str,
    breakdown: &CostBreakdown,
) -> Result<PaymentSubmission, QuoteError> {
    let proof_url = proof_url.trim();
    if proof_url.is_empty() {
        return Err(QuoteError::MissingProof);
    }

    let unavailable = || {
        QuoteError::Unavailable(
            breakdown
                .unavailable_reason
                .unwrap_or(Unavailable::MissingCoordinate),
        )
    };
    let shipping_cost = breakdown.shipping_cost.ok_or_else(unavailable)?;
    let total_amount = breakdown.total_amount.ok_or_else(unavailable)?;

    Ok(PaymentSubmission {
        payment_method: method,
        payment_proof_url: proof_url.to_string(),
        waste_cost: breakdown.waste_cost,
        shipping_cost,
        total_amount,
    })
}
