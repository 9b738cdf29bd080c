use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string of `GET /track`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct TrackQuery {
    #[validate(length(min = 1, max = 64))]
    pub number: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub carrier: Option<String>,
}
