// Core tracking logic exports
pub mod carriers;
pub mod failure;
pub mod tracker;
pub mod validation;

pub use carriers::CarrierList;
pub use failure::TrackingFailure;
pub use tracker::Tracker;
pub use validation::{validate_query, matches_tracking_pattern, TrackingRequest, ValidationError};
