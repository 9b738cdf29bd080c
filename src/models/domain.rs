use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single scan event reported by the aggregator
///
/// Only the common fields are named; anything else the aggregator sends is
/// carried through untouched so callers see the full event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of a `GET /v1/shipments/track` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamShipment {
    #[serde(rename = "trackingNumber", default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub events: Option<Vec<TrackingEvent>>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Whether an aggregator body flags itself as an error.
///
/// Mirrors JSON truthiness: `null`, `false`, `0` and `""` do not count.
pub fn body_signals_error(body: &Value) -> bool {
    match body.get("error") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |v| v != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_flag_truthiness() {
        assert!(!body_signals_error(&json!({ "status": "Delivered" })));
        assert!(!body_signals_error(&json!({ "error": null })));
        assert!(!body_signals_error(&json!({ "error": false })));
        assert!(!body_signals_error(&json!({ "error": 0 })));
        assert!(!body_signals_error(&json!({ "error": "" })));
        assert!(body_signals_error(&json!({ "error": true })));
        assert!(body_signals_error(&json!({ "error": "Invalid carrier" })));
        assert!(body_signals_error(&json!({ "error": { "code": 42 } })));
    }

    #[test]
    fn test_event_keeps_unknown_fields() {
        let raw = json!({
            "date": "2024-03-01T10:00:00Z",
            "status": "Item dispatched",
            "location": "Kuala Lumpur",
            "code": "EMD"
        });

        let event: TrackingEvent = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(event.location.as_deref(), Some("Kuala Lumpur"));
        assert_eq!(event.extra.get("code"), Some(&json!("EMD")));
        assert_eq!(serde_json::to_value(&event).unwrap(), raw);
    }
}
