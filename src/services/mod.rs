// Service exports
pub mod trackmage;
pub mod upstream;

pub use trackmage::TrackmageClient;
pub use upstream::{TrackingUpstream, UpstreamError};
