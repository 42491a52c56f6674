//! Delivery fee preview. Every screen that shows a shipping line goes through
//! [`shipping_cost`] so the tariff cannot drift between them.

/// Whole Rupiah charged per kilometre of great-circle distance.
pub const RATE_PER_KM: u64 = 5_000;

/// Floor applied to every delivery, whole Rupiah.
pub const MINIMUM_COST: u64 = 10_000;

/// Fee for a route of `distance_km`, or `None` while the route is unknown.
///
/// `distance_km * RATE_PER_KM` is rounded half away from zero before the
/// floor is applied.
pub fn shipping_cost(distance_km: Option<f64>) -> Option<u64> {
    let distance_km = distance_km.filter(|km| km.is_finite() && *km >= 0.0)?;
    let metered = (distance_km * RATE_PER_KM as f64).round() as u64;

    Some(metered.max(MINIMUM_COST))
}
