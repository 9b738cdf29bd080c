use crate::models::{ErrorDetails, TrackingErrorResponse};
use crate::services::UpstreamError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

pub const MSG_LOOKUP_FAILED: &str = "Gagal mendapatkan maklumat tracking";
pub const MSG_NOT_FOUND: &str = "Nombor tracking tidak ditemui dalam sistem";
pub const MSG_UNREACHABLE: &str = "Tidak dapat menghubungi pelayan tracking";
pub const MSG_TIMED_OUT: &str = "Pelayan tracking tidak memberi respons dalam masa yang ditetapkan";
pub const MSG_ALL_CARRIERS_FAILED: &str = "Semua percubaan carrier gagal";
pub const SUGGESTION_RETRY: &str = "Sila pastikan nombor tracking betul atau cuba lagi nanti";
pub const SUGGESTION_NOT_FOUND: &str = "Pastikan nombor betul atau bungkusan sudah didaftarkan";

/// Final outcome of a lookup where no carrier succeeded
#[derive(Debug, Clone, PartialEq)]
pub enum TrackingFailure {
    /// The last carrier attempt that failed
    Upstream { carrier: String, error: UpstreamError },
    /// There was nothing to try
    NoAttempts,
}

impl TrackingFailure {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Upstream { error, .. } => error.status_code(),
            Self::NoAttempts => 500,
        }
    }

    /// Build the caller-facing error body
    pub fn to_response(&self, now: DateTime<Utc>) -> TrackingErrorResponse {
        let (message, api_error, suggestion) = match self {
            Self::Upstream { error, .. } => match error {
                _ if error.is_not_found() => {
                    (MSG_NOT_FOUND, error.api_error(), Some(SUGGESTION_NOT_FOUND.to_string()))
                }
                UpstreamError::Transport { timed_out: true, .. } => (MSG_TIMED_OUT, error.api_error(), None),
                UpstreamError::Transport { .. } => (MSG_UNREACHABLE, error.api_error(), None),
                _ => (MSG_LOOKUP_FAILED, error.api_error(), None),
            },
            Self::NoAttempts => (
                MSG_LOOKUP_FAILED,
                Value::String(MSG_ALL_CARRIERS_FAILED.to_string()),
                None,
            ),
        };

        TrackingErrorResponse {
            error: true,
            status: self.status_code(),
            message: message.to_string(),
            details: ErrorDetails {
                api_error,
                suggestion: SUGGESTION_RETRY.to_string(),
            },
            suggestion,
            timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap()
    }

    fn failed(error: UpstreamError) -> TrackingFailure {
        TrackingFailure::Upstream { carrier: "malaysia-post".to_string(), error }
    }

    #[test]
    fn test_not_found_gets_dedicated_message() {
        let body = failed(UpstreamError::Status { status: 404, body: json!({ "message": "Shipment not found" }) })
            .to_response(fixed_now());

        assert_eq!(body.status, 404);
        assert_eq!(body.message, MSG_NOT_FOUND);
        assert_eq!(body.suggestion.as_deref(), Some(SUGGESTION_NOT_FOUND));
        assert_eq!(body.details.api_error, json!({ "message": "Shipment not found" }));
        assert_eq!(body.timestamp, "2024-03-01T08:30:00.000Z");
    }

    #[test]
    fn test_upstream_status_is_mirrored() {
        let failure = failed(UpstreamError::Status { status: 401, body: json!("Unauthorized") });
        let body = failure.to_response(fixed_now());

        assert_eq!(failure.status_code(), 401);
        assert_eq!(body.message, MSG_LOOKUP_FAILED);
        assert_eq!(body.suggestion, None);
        assert_eq!(body.details.suggestion, SUGGESTION_RETRY);
    }

    #[test]
    fn test_transport_failures_default_to_500() {
        let refused = failed(UpstreamError::Transport { message: "connection refused".into(), timed_out: false });
        assert_eq!(refused.status_code(), 500);
        assert_eq!(refused.to_response(fixed_now()).message, MSG_UNREACHABLE);

        let slow = failed(UpstreamError::Transport { message: "operation timed out".into(), timed_out: true });
        assert_eq!(slow.to_response(fixed_now()).message, MSG_TIMED_OUT);
    }

    #[test]
    fn test_no_attempts_is_generic() {
        let body = TrackingFailure::NoAttempts.to_response(fixed_now());
        assert_eq!(body.status, 500);
        assert_eq!(body.details.api_error, json!(MSG_ALL_CARRIERS_FAILED));
    }

    #[test]
    fn test_suggestion_omitted_from_json_unless_not_found() {
        let value = serde_json::to_value(TrackingFailure::NoAttempts.to_response(fixed_now())).unwrap();
        assert_eq!(value["error"], json!(true));
        assert!(value.get("suggestion").is_none());
        assert!(value["details"].get("apiError").is_some());
    }
}
