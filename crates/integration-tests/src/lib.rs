//! Integration tests for the Mangal Chai API.
//!
//! # Running Tests
//!
//! ```bash
//! # In-process tests (no database needed)
//! cargo test -p mangal-chai-integration-tests
//!
//! # Live tests against a running server with a freshly seeded store
//! CHAI_API_BASE_URL=http://localhost:8001 \
//!     cargo test -p mangal-chai-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `tests/in_process.rs` - Full router over HTTP, backed by the in-memory store
//! - `tests/live_api.rs` - The same scenarios against a deployed server

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{Value, json};

use mangal_chai_api::{config::ApiConfig, db::MemoryStore, routes, seed, state::AppState};

/// Base URL for a live API server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("CHAI_API_BASE_URL").unwrap_or_else(|_| "http://localhost:8001".to_string())
}

/// A server running on an ephemeral local port.
pub struct TestApp {
    pub base_url: String,
    pub store: Arc<MemoryStore>,
}

/// Serve the full application over a seeded in-memory store.
///
/// # Errors
///
/// Returns an error if no local port can be bound.
pub async fn spawn_app() -> std::io::Result<TestApp> {
    let store = Arc::new(MemoryStore::new());
    seed::seed_catalog(store.as_ref())
        .await
        .map_err(std::io::Error::other)?;

    let app = routes::app(AppState::new(ApiConfig::default(), store.clone()));
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(TestApp {
        base_url: format!("http://{addr}/api"),
        store,
    })
}

/// Order request body with a fixed customer.
#[must_use]
pub fn order_request(items: &[(&str, u32)]) -> Value {
    json!({
        "customer_info": {
            "name": "Anjali Verma",
            "phone": "+91 99280 11111",
            "email": "anjali@example.com",
            "address": "3 MI Road, Jaipur"
        },
        "items": items
            .iter()
            .map(|(product_id, quantity)| json!({"product_id": product_id, "quantity": quantity}))
            .collect::<Vec<_>>(),
        "notes": "Leave with the guard"
    })
}
