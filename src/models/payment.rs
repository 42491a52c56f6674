use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Transfer,
    Qris,
}

/// Payment payload echoed to the transaction backend. The backend recomputes
/// and owns the charged amount; these figures are the client's preview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentSubmission {
    pub payment_method: PaymentMethod,
    pub payment_proof_url: String,
    pub waste_cost: u64,
    pub shipping_cost: u64,
    pub total_amount: u64,
}
