//! HTTP middleware stack for the API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. CORS (answers preflight requests before they reach a handler)
//! 3. `TraceLayer` (one span per request)
//! 4. Request ID (recorded into the trace span, echoed in the response)

pub mod cors;
pub mod request_id;

pub use cors::cors_layer;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
