// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Layers applied to the merged router by the server

/// Cross-origin resource sharing
pub mod cors;
/// Per-request spans
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use tracing::{create_request_span, request_trace_layer, REQUEST_ID_HEADER};
