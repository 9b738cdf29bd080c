use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use validator::Validate;
use crate::models::{TrackQuery, ValidationErrorResponse};

/// Pos Malaysia shape: two or three letters, nine digits, two letters
pub const TRACKING_NUMBER_PATTERN: &str = r"^[A-Za-z]{2,3}\d{9}[A-Za-z]{2}$";
pub const VALID_EXAMPLE: &str = "ENE083992448MY";
pub const PATTERN_HINT: &str = "2-3 huruf + 9 digit + 2 huruf";

pub const MSG_INVALID_NUMBER: &str = "Format nombor tracking tidak valid";
pub const MSG_INVALID_QUERY: &str = "Parameter tracking tidak valid";

static TRACKING_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(TRACKING_NUMBER_PATTERN).expect("tracking number pattern is a valid regex")
});

/// Why an inbound tracking request was refused before reaching upstream
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("tracking number is missing")]
    Missing,

    #[error("tracking number {0:?} does not match {TRACKING_NUMBER_PATTERN}")]
    InvalidFormat(String),

    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl ValidationError {
    /// Body returned to the caller with a 400
    pub fn to_response(&self) -> ValidationErrorResponse {
        let error = match self {
            Self::Missing | Self::InvalidFormat(_) => MSG_INVALID_NUMBER,
            Self::InvalidQuery(_) => MSG_INVALID_QUERY,
        };

        ValidationErrorResponse {
            error: error.to_string(),
            contoh_valid: VALID_EXAMPLE.to_string(),
            pola: PATTERN_HINT.to_string(),
        }
    }
}

/// A tracking request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingRequest {
    pub number: String,
    pub carrier: Option<String>,
}

#[inline]
pub fn matches_tracking_pattern(number: &str) -> bool {
    TRACKING_NUMBER_RE.is_match(number)
}

/// Validate the `/track` query
///
/// Surrounding whitespace is ignored. With `strict` off any non-empty
/// number is accepted.
pub fn validate_query(query: &TrackQuery, strict: bool) -> Result<TrackingRequest, ValidationError> {
    let number = query
        .number
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or(ValidationError::Missing)?;

    let trimmed = TrackQuery {
        number: Some(number.to_string()),
        carrier: query
            .carrier
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(String::from),
    };
    trimmed
        .validate()
        .map_err(|errors| ValidationError::InvalidQuery(errors.to_string()))?;

    if strict && !matches_tracking_pattern(number) {
        return Err(ValidationError::InvalidFormat(number.to_string()));
    }

    Ok(TrackingRequest {
        number: number.to_string(),
        carrier: trimmed.carrier,
    })
}
