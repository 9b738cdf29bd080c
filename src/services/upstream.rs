use crate::models::UpstreamShipment;
use serde_json::Value;
use std::future::Future;
use thiserror::Error;

/// Errors from a single aggregator call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UpstreamError {
    #[error("could not reach tracking API: {message}")]
    Transport { message: String, timed_out: bool },

    #[error("tracking API returned HTTP {status}")]
    Status { status: u16, body: Value },

    #[error("tracking API reported an error in its response body")]
    Rejected { body: Value },

    #[error("invalid response format: {reason}")]
    InvalidResponse { reason: String, body: String },
}

impl UpstreamError {
    /// HTTP status reported to the caller for this failure
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Transport { .. } => 500,
            Self::Status { status, .. } => *status,
            Self::Rejected { .. } | Self::InvalidResponse { .. } => 502,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// Raw upstream payload, or the error text when there was none
    pub fn api_error(&self) -> Value {
        match self {
            Self::Transport { message, .. } => Value::String(message.clone()),
            Self::Status { body, .. } | Self::Rejected { body } => body.clone(),
            Self::InvalidResponse { body, reason } if body.is_empty() => Value::String(reason.clone()),
            Self::InvalidResponse { body, .. } => Value::String(body.clone()),
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            timed_out: err.is_timeout(),
            message: err.to_string(),
        }
    }
}

/// Source of shipment data for one tracking number under one carrier id
pub trait TrackingUpstream {
    fn track(
        &self,
        number: &str,
        carrier: &str,
    ) -> impl Future<Output = Result<UpstreamShipment, UpstreamError>>;
}
