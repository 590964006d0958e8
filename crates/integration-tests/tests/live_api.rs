//! Integration tests against a running API server.
//!
//! These tests require:
//! - A running `PostgreSQL` database
//! - The API server running (cargo run -p mangal-chai-api) over a freshly
//!   seeded catalog
//!
//! Run with: cargo test -p mangal-chai-integration-tests -- --ignored

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use mangal_chai_core::Product;
use mangal_chai_integration_tests::{base_url, order_request};

#[tokio::test]
#[ignore = "Requires running API server"]
async fn test_health() {
    let resp = Client::new()
        .get(format!("{}/api/health", base_url()))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore = "Requires running API server with a seeded catalog"]
async fn test_catalog_endpoints() {
    let client = Client::new();
    let base_url = base_url();

    let products: Vec<Product> = client
        .get(format!("{base_url}/api/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!products.is_empty());

    let categories: Vec<String> = client
        .get(format!("{base_url}/api/categories"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(categories.len(), 5);

    let black_tea: Vec<Product> = client
        .get(format!("{base_url}/api/products/category/Black Tea"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(black_tea.len(), 2);

    let resp = client
        .get(format!("{base_url}/api/products/invalid-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server with a seeded catalog"]
async fn test_order_flow() {
    let client = Client::new();
    let base_url = base_url();

    let products: Vec<Product> = client
        .get(format!("{base_url}/api/products"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let assam = products
        .iter()
        .find(|p| p.name == "Premium Assam Black Tea")
        .unwrap();

    let resp = client
        .post(format!("{base_url}/api/orders"))
        .json(&order_request(&[(assam.id.as_str(), 2)]))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let confirmation: Value = resp.json().await.unwrap();
    assert_eq!(confirmation["total_amount"], json!(598.0));

    let order_id = confirmation["order_id"].as_str().unwrap();
    let order: Value = client
        .get(format!("{base_url}/api/orders/{order_id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(order["id"], order_id);
    assert_eq!(order["status"], "pending");

    let resp = client
        .post(format!("{base_url}/api/orders"))
        .json(&json!({"items": [{"product_id": assam.id.as_str(), "quantity": 1}]}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let resp = client
        .get(format!("{base_url}/api/orders/invalid-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
