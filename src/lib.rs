//! Parcel Track - tracking proxy for Pos Malaysia shipments
//!
//! Accepts a tracking number over HTTP, resolves it against the TrackMage
//! aggregator by trying a fixed list of carrier ids in order, and returns a
//! normalized status and event list.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CarrierList, Tracker, TrackingFailure, TrackingRequest, ValidationError};
pub use models::{TrackingEvent, TrackingResponse, TrackingErrorResponse, TrackQuery};
pub use services::{TrackingUpstream, TrackmageClient, UpstreamError};
