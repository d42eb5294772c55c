pub mod metrics;

pub use metrics::metrics_middleware;

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";
