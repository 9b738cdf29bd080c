// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{TrackingEvent, UpstreamShipment, body_signals_error};
pub use requests::TrackQuery;
pub use responses::{TrackingResponse, TrackingErrorResponse, ErrorDetails, ValidationErrorResponse, ErrorResponse};
