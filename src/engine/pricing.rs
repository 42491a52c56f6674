use crate::engine::shipping::shipping_cost;
use crate::error::QuoteError;
use crate::geo::haversine_km;
use crate::models::booking::{BookingDraft, TransportMethod};
use crate::models::quote::{CostBreakdown, Unavailable};
use crate::models::waste::WasteListing;

/// Price of `quantity_kg` out of a lot, pro-rated from the lot price.
/// Without a quantity the whole lot is booked.
pub fn waste_cost(listing: &WasteListing, quantity_kg: Option<f64>) -> Result<u64, QuoteError> {
    if !listing.price.is_finite() || listing.price < 0.0 {
        return Err(QuoteError::InvalidListing(format!(
            "waste {} has price {}",
            listing.id, listing.price
        )));
    }

    if !listing.weight.is_finite() || listing.weight <= 0.0 {
        return Err(QuoteError::InvalidListing(format!(
            "waste {} has weight {}",
            listing.id, listing.weight
        )));
    }

    let quantity = quantity_kg.unwrap_or(listing.weight);
    if !quantity.is_finite() || quantity <= 0.0 || quantity > listing.weight {
        return Err(QuoteError::InvalidQuantity(format!(
            "{quantity} kg is outside 0..={} kg",
            listing.weight
        )));
    }

    if listing.price == 0.0 {
        return Ok(0);
    }

    let price_per_kg = listing.price / listing.weight;
    let amount = (price_per_kg * quantity).round();
    // u64::MAX rounds up to 2^64 as f64, so equality already overflows.
    if amount >= u64::MAX as f64 {
        return Err(QuoteError::InvalidListing(format!(
            "waste {} costs {amount}, more than a quote can carry",
            listing.id
        )));
    }

    Ok(amount as u64)
}

fn route_distance(listing: &WasteListing, draft: &BookingDraft) -> Result<f64, Unavailable> {
    let origin = listing.origin()?;
    let destination = draft.destination()?;

    Ok(haversine_km(&origin, &destination))
}

pub fn quote_booking(listing: &WasteListing, draft: &BookingDraft) -> Result<CostBreakdown, QuoteError> {
    let waste_cost = waste_cost(listing, draft.estimated_quantity)?;
    let route = route_distance(listing, draft);

    let (distance_km, shipping_cost, unavailable_reason) = match (draft.transport_method, route) {
        (TransportMethod::Pickup, route) => (route.ok(), Some(0), None),
        (TransportMethod::Delivery, Ok(km)) => (Some(km), shipping_cost(Some(km)), None),
        (TransportMethod::Delivery, Err(reason)) => (None, None, Some(reason)),
    };

    let total_amount = match shipping_cost {
        Some(shipping) => Some(waste_cost.checked_add(shipping).ok_or_else(|| {
            QuoteError::InvalidListing(format!(
                "waste {} total overflows with shipping {shipping}",
                listing.id
            ))
        })?),
        None => None,
    };

    Ok(CostBreakdown {
        distance_km,
        waste_cost,
        shipping_cost,
        total_amount,
        unavailable_reason,
    })
}

#[cfg(test)]
mod tests {
    use super::{quote_booking, waste_cost};
    use crate::error::QuoteError;
    use crate::models::booking::{BookingDraft, TransportMethod};
    use crate::models::quote::Unavailable;
    use crate::models::waste::WasteListing;

    fn listing(price: f64, weight: f64) -> WasteListing {
        WasteListing {
            id: 7,
            weight,
            price,
            latitude: Some(-5.132780),
            longitude: Some(119.488109),
        }
    }

    fn delivery(latitude: Option<f64>, longitude: Option<f64>) -> BookingDraft {
        BookingDraft {
            transport_method: TransportMethod::Delivery,
            estimated_quantity: None,
            delivery_latitude: latitude,
            delivery_longitude: longitude,
        }
    }

    #[test]
    fn free_lot_costs_nothing() {
        assert_eq!(waste_cost(&listing(0.0, 120.0), Some(40.0)), Ok(0));
    }

    #[test]
    fn partial_quantity_is_pro_rated() {
        // 150000 for 100 kg, booking 33 kg
        assert_eq!(waste_cost(&listing(150_000.0, 100.0), Some(33.0)), Ok(49_500));
        assert_eq!(waste_cost(&listing(100_000.0, 3.0), Some(1.0)), Ok(33_333));
    }

    #[test]
    fn pro_rated_amount_rounds_half_away_from_zero() {
        // 3 for 2 kg, booking 1 kg = 1.5
        assert_eq!(waste_cost(&listing(3.0, 2.0), Some(1.0)), Ok(2));
        // 5 for 2 kg, booking 1 kg = 2.5
        assert_eq!(waste_cost(&listing(5.0, 2.0), Some(1.0)), Ok(3));
    }

    #[test]
    fn price_beyond_u64_is_rejected() {
        assert!(matches!(
            waste_cost(&listing(1e20, 1.0), None),
            Err(QuoteError::InvalidListing(_))
        ));
        assert!(matches!(
            quote_booking(
                &listing(1e20, 1.0),
                &delivery(Some(-5.147665), Some(119.432732))
            ),
            Err(QuoteError::InvalidListing(_))
        ));
    }

    #[test]
    fn total_that_overflows_with_shipping_is_rejected() {
        // Largest f64 below 2^64: fits as a waste cost, not with a fee on top.
        let lot = listing(18_446_744_073_709_549_568.0, 1.0);
        assert_eq!(waste_cost(&lot, None), Ok(18_446_744_073_709_549_568));

        assert!(matches!(
            quote_booking(&lot, &delivery(Some(-5.147665), Some(119.432732))),
            Err(QuoteError::InvalidListing(_))
        ));
    }

    #[test]
    fn missing_quantity_books_the_whole_lot() {
        assert_eq!(waste_cost(&listing(150_000.0, 100.0), None), Ok(150_000));
    }

    #[test]
    fn quantity_outside_lot_is_rejected() {
        let lot = listing(150_000.0, 100.0);
        for quantity in [0.0, -1.0, 100.5, f64::NAN] {
            assert!(matches!(
                waste_cost(&lot, Some(quantity)),
                Err(QuoteError::InvalidQuantity(_))
            ));
        }
    }

    #[test]
    fn weightless_lot_is_rejected() {
        assert!(matches!(
            waste_cost(&listing(150_000.0, 0.0), None),
            Err(QuoteError::InvalidListing(_))
        ));
        assert!(matches!(
            waste_cost(&listing(-1.0, 10.0), None),
            Err(QuoteError::InvalidListing(_))
        ));
    }

    #[test]
    fn delivery_adds_shipping_to_the_total() {
        let quote = quote_booking(
            &listing(150_000.0, 100.0),
            &delivery(Some(-5.147665), Some(119.432732)),
        )
        .unwrap();

        assert!((quote.distance_km.unwrap() - 6.3523).abs() < 0.001);
        assert_eq!(quote.waste_cost, 150_000);
        assert_eq!(quote.shipping_cost, Some(31_761));
        assert_eq!(quote.total_amount, Some(181_761));
        assert_eq!(quote.unavailable_reason, None);
    }

    #[test]
    fn delivery_without_destination_is_unavailable_not_free() {
        let quote = quote_booking(&listing(150_000.0, 100.0), &delivery(None, None)).unwrap();

        assert_eq!(quote.distance_km, None);
        assert_eq!(quote.shipping_cost, None);
        assert_eq!(quote.total_amount, None);
        assert_eq!(quote.unavailable_reason, Some(Unavailable::MissingCoordinate));
        assert_eq!(quote.waste_cost, 150_000);
    }

    #[test]
    fn delivery_from_unlocated_listing_is_unavailable() {
        let mut lot = listing(0.0, 10.0);
        lot.longitude = None;

        let quote = quote_booking(&lot, &delivery(Some(-5.147665), Some(119.432732))).unwrap();
        assert_eq!(quote.shipping_cost, None);
        assert_eq!(quote.unavailable_reason, Some(Unavailable::MissingCoordinate));
    }

    #[test]
    fn delivery_with_garbage_coordinates_is_unavailable() {
        let quote =
            quote_booking(&listing(0.0, 10.0), &delivery(Some(f64::NAN), Some(119.43))).unwrap();
        assert_eq!(quote.total_amount, None);
        assert_eq!(quote.unavailable_reason, Some(Unavailable::NonFiniteInput));
    }

    #[test]
    fn pickup_has_no_shipping_fee() {
        let mut draft = delivery(None, None);
        draft.transport_method = TransportMethod::Pickup;
        draft.estimated_quantity = Some(50.0);

        let quote = quote_booking(&listing(150_000.0, 100.0), &draft).unwrap();
        assert_eq!(quote.distance_km, None);
        assert_eq!(quote.shipping_cost, Some(0));
        assert_eq!(quote.total_amount, Some(75_000));
        assert_eq!(quote.unavailable_reason, None);
    }

    #[test]
    fn same_inputs_give_same_quote() {
        let lot = listing(150_000.0, 100.0);
        let draft = delivery(Some(-5.147665), Some(119.432732));

        assert_eq!(quote_booking(&lot, &draft), quote_booking(&lot, &draft));
    }
}
