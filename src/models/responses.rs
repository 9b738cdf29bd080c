use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::models::domain::TrackingEvent;

/// Successful tracking lookup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingResponse {
    pub success: bool,
    #[serde(rename = "trackingNumber")]
    pub tracking_number: String,
    pub carrier: String,
    pub status: String,
    pub events: Vec<TrackingEvent>,
    #[serde(rename = "processingTimeMs")]
    pub processing_time_ms: u64,
    #[serde(rename = "carrierUsed")]
    pub carrier_used: String,
}

/// Tracking lookup that failed upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingErrorResponse {
    pub error: bool,
    pub status: u16,
    pub message: String,
    pub details: ErrorDetails,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    #[serde(rename = "apiError")]
    pub api_error: Value,
    pub suggestion: String,
}

/// Rejected tracking number, with a hint of what a valid one looks like
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub contoh_valid: String,
    pub pola: String,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
