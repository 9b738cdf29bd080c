use crate::config::TrackingSettings;
use crate::core::carriers::CarrierList;
use crate::core::failure::TrackingFailure;
use crate::core::validation::TrackingRequest;
use crate::models::TrackingResponse;
use crate::services::TrackingUpstream;
use std::time::Instant;

/// Resolves a tracking number by probing the aggregator one carrier id at a time
///
/// # Fallback
/// 1. Carriers are tried strictly in order, one call at a time
/// 2. The first successful response wins outright
/// 3. Failures are remembered only as the most recent one
/// 4. When the list is exhausted, the most recent failure is reported
#[derive(Debug, Clone)]
pub struct Tracker<U> {
    upstream: U,
    carriers: CarrierList,
    carrier_label: String,
    default_status: String,
}

impl<U: TrackingUpstream> Tracker<U> {
    pub fn new(upstream: U, carriers: CarrierList, carrier_label: String, default_status: String) -> Self {
        Self {
            upstream,
            carriers,
            carrier_label,
            default_status,
        }
    }

    pub fn from_settings(upstream: U, settings: &TrackingSettings) -> Self {
        Self::new(
            upstream,
            CarrierList::new(settings.carriers.iter().cloned()),
            settings.carrier_label.clone(),
            settings.default_status.clone(),
        )
    }

    pub fn carriers(&self) -> &CarrierList {
        &self.carriers
    }

    /// Look up a validated tracking request
    pub async fn track(&self, request: &TrackingRequest) -> Result<TrackingResponse, TrackingFailure> {
        let started = Instant::now();
        let mut last_failure = TrackingFailure::NoAttempts;

        for carrier in self.carriers.attempt_order(request.carrier.as_deref()) {
            tracing::debug!("Trying carrier {} for {}", carrier, request.number);

            match self.upstream.track(&request.number, carrier).await {
                Ok(shipment) => {
                    let processing_time_ms = started.elapsed().as_millis() as u64;
                    tracing::info!(
                        "Resolved {} via carrier {} in {}ms",
                        request.number,
                        carrier,
                        processing_time_ms
                    );

                    return Ok(TrackingResponse {
                        success: true,
                        tracking_number: request.number.clone(),
                        carrier: self.carrier_label.clone(),
                        status: shipment.status.unwrap_or_else(|| self.default_status.clone()),
                        events: shipment.events.unwrap_or_default(),
                        processing_time_ms,
                        carrier_used: carrier.to_string(),
                    });
                }
                Err(error) => {
                    tracing::warn!("Carrier {} failed for {}: {}", carrier, request.number, error);
                    last_failure = TrackingFailure::Upstream {
                        carrier: carrier.to_string(),
                        error,
                    };
                }
            }
        }

        tracing::warn!(
            "All carrier attempts failed for {} after {}ms",
            request.number,
            started.elapsed().as_millis()
        );

        Err(last_failure)
    }
}
