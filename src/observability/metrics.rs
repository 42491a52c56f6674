use prometheus::{Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};

use crate::models::booking::TransportMethod;
use crate::models::quote::CostBreakdown;

const DISTANCE_BUCKETS_KM: &[f64] = &[1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 250.0, 500.0];

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub quotes_total: IntCounterVec,
    pub payment_drafts_total: IntCounterVec,
    pub quoted_distance_km: Histogram,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let quotes_total = IntCounterVec::new(
            Opts::new("quotes_total", "Total cost previews by outcome"),
            &["outcome"],
        )
        .expect("valid quotes_total metric");

        let payment_drafts_total = IntCounterVec::new(
            Opts::new("payment_drafts_total", "Total payment payloads by outcome"),
            &["outcome"],
        )
        .expect("valid payment_drafts_total metric");

        let quoted_distance_km = Histogram::with_opts(
            HistogramOpts::new("quoted_distance_km", "Great-circle distance of quoted routes in km")
                .buckets(DISTANCE_BUCKETS_KM.to_vec()),
        )
        .expect("valid quoted_distance_km metric");

        registry
            .register(Box::new(quotes_total.clone()))
            .expect("register quotes_total");
        registry
            .register(Box::new(payment_drafts_total.clone()))
            .expect("register payment_drafts_total");
        registry
            .register(Box::new(quoted_distance_km.clone()))
            .expect("register quoted_distance_km");

        Self {
            registry,
            quotes_total,
            payment_drafts_total,
            quoted_distance_km,
        }
    }

    /// Pickup quotes still count, but their distance is informational and
    /// stays out of the histogram.
    pub fn observe_quote(&self, transport: TransportMethod, breakdown: &CostBreakdown) {
        let outcome = match breakdown.total_amount {
            Some(_) => "available",
            None => "unavailable",
        };
        self.quotes_total.with_label_values(&[outcome]).inc();

        if let (TransportMethod::Delivery, Some(km)) = (transport, breakdown.distance_km) {
            self.quoted_distance_km.observe(km);
        }
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
