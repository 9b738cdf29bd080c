use crate::config::UpstreamSettings;
use crate::models::{body_signals_error, UpstreamShipment};
use crate::services::upstream::{TrackingUpstream, UpstreamError};
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// TrackMage shipment tracking client
///
/// Issues `GET /v1/shipments/track` with a bearer token. The underlying
/// `reqwest::Client` is shared with the rest of the process.
#[derive(Debug, Clone)]
pub struct TrackmageClient {
    base_url: String,
    api_key: String,
    timeout: Duration,
    client: Client,
}

impl TrackmageClient {
    pub fn new(client: Client, settings: &UpstreamSettings) -> Self {
        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            timeout: settings.timeout(),
            client,
        }
    }

    fn track_url(&self) -> String {
        format!("{}/v1/shipments/track", self.base_url)
    }
}

impl TrackingUpstream for TrackmageClient {
    async fn track(&self, number: &str, carrier: &str) -> Result<UpstreamShipment, UpstreamError> {
        let response = self
            .client
            .get(self.track_url())
            .query(&[("number", number), ("carrier", carrier)])
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!("TrackMage returned {} for carrier {}: {}", status, carrier, body);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: serde_json::from_str(&body).unwrap_or(Value::String(body)),
            });
        }

        let json: Value = serde_json::from_str(&body).map_err(|e| UpstreamError::InvalidResponse {
            reason: format!("Failed to parse tracking response: {}", e),
            body: body.clone(),
        })?;

        if json.is_null() {
            return Err(UpstreamError::InvalidResponse {
                reason: "Empty tracking response".to_string(),
                body,
            });
        }

        if body_signals_error(&json) {
            return Err(UpstreamError::Rejected { body: json });
        }

        serde_json::from_value(json).map_err(|e| UpstreamError::InvalidResponse {
            reason: format!("Failed to parse tracking response: {}", e),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let settings = UpstreamSettings {
            base_url: "https://trackmage.test/".to_string(),
            api_key: "test_key".to_string(),
            timeout_ms: 1500,
        };

        let client = TrackmageClient::new(Client::new(), &settings);

        assert_eq!(client.track_url(), "https://trackmage.test/v1/shipments/track");
        assert_eq!(client.api_key, "test_key");
        assert_eq!(client.timeout, Duration::from_millis(1500));
    }
}
