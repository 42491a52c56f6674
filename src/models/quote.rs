use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Why a distance or shipping fee could not be computed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Unavailable {
    MissingCoordinate,
    NonFiniteInput,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Unavailable::MissingCoordinate => "missing_coordinate",
            Unavailable::NonFiniteInput => "non_finite_input",
        };
        f.write_str(tag)
    }
}

/// Cost preview for one booking. `None` means "not computable yet" and must
/// never be rendered as free.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostBreakdown {
    pub distance_km: Option<f64>,
    pub waste_cost: u64,
    pub shipping_cost: Option<u64>,
    pub total_amount: Option<u64>,
    pub unavailable_reason: Option<Unavailable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub token: Uuid,
    pub quoted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub breakdown: CostBreakdown,
}

impl Quote {
    pub fn new(breakdown: CostBreakdown) -> Self {
        Self {
            token: Uuid::new_v4(),
            quoted_at: Utc::now(),
            breakdown,
        }
    }
}
