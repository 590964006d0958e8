//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api/health                          - Liveness check
//! GET  /api/health/ready                    - Readiness check (pings the store)
//!
//! # Catalog
//! GET  /api/products                        - All products
//! GET  /api/products/{id}                   - One product
//! GET  /api/products/category/{category}    - Products in a category (exact match)
//! GET  /api/categories                      - Distinct categories
//!
//! # Orders
//! POST /api/orders                          - Place an order
//! GET  /api/orders/{id}                     - One order
//! ```
//!
//! Any other path answers 404 `{"detail": "Not Found"}`.

pub mod health;
pub mod orders;
pub mod products;

use axum::{Router, body::Body, http::Request, middleware::from_fn};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::middleware::{cors_layer, request_id_middleware};
use crate::state::AppState;

/// Create all routes under the `/api` prefix.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(products::router())
        .merge(orders::router())
}

/// Build the complete application: routes, state and middleware.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config().allowed_origins);

    Router::new()
        .nest("/api", routes())
        .fallback(not_found)
        .with_state(state)
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .layer(cors)
        // Sentry layers (outermost for full request coverage)
        .layer(sentry_tower::NewSentryLayer::new_from_top())
        .layer(sentry_tower::SentryHttpLayer::new().enable_transaction())
}

async fn not_found() -> AppError {
    AppError::RouteNotFound
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use axum::{
        http::{StatusCode, header},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use mangal_chai_core::Product;

    use super::*;
    use crate::config::ApiConfig;
    use crate::db::MemoryStore;
    use crate::middleware::REQUEST_ID_HEADER;
    use crate::seed;

    fn seeded() -> (Arc<MemoryStore>, Router, Vec<Product>) {
        let products = seed::seed_products();
        let store = Arc::new(MemoryStore::with_products(products.clone()));
        let router = app(AppState::new(ApiConfig::default(), store.clone()));
        (store, router, products)
    }

    async fn get(router: Router, uri: &str) -> Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(router: Router, uri: &str, body: &Value) -> Response {
        router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn order_body(items: &[(&str, u32)]) -> Value {
        json!({
            "customer_info": {
                "name": "Meera Joshi",
                "phone": "+91 94140 55555",
                "email": "meera@example.com",
                "address": "12 Hawa Mahal Road, Jaipur"
            },
            "items": items
                .iter()
                .map(|(id, qty)| json!({"product_id": id, "quantity": qty}))
                .collect::<Vec<_>>()
        })
    }

    #[tokio::test]
    async fn test_health() {
        let (_, router, _) = seeded();
        let response = get(router, "/api/health").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert_eq!(
            json_body(response).await,
            json!({"status": "healthy", "message": "Mangal Chai API is running"})
        );
    }

    #[tokio::test]
    async fn test_readiness_reflects_store() {
        let (store, router, _) = seeded();
        let response = get(router.clone(), "/api/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);

        store.set_unavailable(true);
        let response = get(router, "/api/health/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_list_and_show_products() {
        let (_, router, products) = seeded();
        let response = get(router.clone(), "/api/products").await;
        assert_eq!(response.status(), StatusCode::OK);

        let listed = json_body(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 6);

        let id = listed[0]["id"].as_str().unwrap().to_owned();
        let response = get(router, &format!("/api/products/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let product = json_body(response).await;
        assert_eq!(product["name"], products[0].name.as_str());
        assert_eq!(product["price"], json!(299.0));
        assert_eq!(product["in_stock"], json!(true));
    }

    #[tokio::test]
    async fn test_unknown_product_is_404() {
        let (_, router, _) = seeded();
        let response = get(router, "/api/products/invalid-id").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({"detail": "Product invalid-id not found"})
        );
    }

    #[tokio::test]
    async fn test_categories_and_category_filter() {
        let (_, router, _) = seeded();
        let categories = json_body(get(router.clone(), "/api/categories").await).await;
        assert_eq!(categories.as_array().unwrap().len(), 5);

        let black = json_body(get(router.clone(), "/api/products/category/Black%20Tea").await).await;
        assert_eq!(black.as_array().unwrap().len(), 2);

        let response = get(router, "/api/products/category/black%20tea").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_place_and_fetch_order() {
        let (_, router, products) = seeded();
        let assam = products[0].id.as_str();

        let response = post_json(router.clone(), "/api/orders", &order_body(&[(assam, 2)])).await;
        assert_eq!(response.status(), StatusCode::OK);

        let confirmation = json_body(response).await;
        assert_eq!(confirmation["message"], "Order placed successfully");
        assert_eq!(confirmation["total_amount"], json!(598.0));

        let order_id = confirmation["order_id"].as_str().unwrap().to_owned();
        let response = get(router, &format!("/api/orders/{order_id}")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let order = json_body(response).await;
        assert_eq!(order["id"], order_id.as_str());
        assert_eq!(order["status"], "pending");
        assert_eq!(order["total_amount"], json!(598.0));
        assert_eq!(order["items"][0]["product_name"], "Premium Assam Black Tea");
        assert_eq!(order["items"][0]["quantity"], 2);
        assert_eq!(order["customer_info"]["name"], "Meera Joshi");
    }

    #[tokio::test]
    async fn test_order_for_unknown_product_is_404() {
        let (store, router, _) = seeded();
        let response = post_json(router, "/api/orders", &order_body(&[("no-such-tea", 1)])).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({"detail": "Product no-such-tea not found"})
        );
        assert_eq!(store.order_count().await, 0);
    }

    #[tokio::test]
    async fn test_order_for_out_of_stock_product_is_400() {
        let (store, router, products) = seeded();
        assert!(store.set_in_stock(&products[5].id, false).await);

        let response = post_json(
            router,
            "/api/orders",
            &order_body(&[(products[5].id.as_str(), 1)]),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"detail": "Product Cardamom Tea is out of stock"})
        );
        assert_eq!(store.order_count().await, 0);
    }

    #[tokio::test]
    async fn test_order_missing_customer_info_is_422() {
        let (store, router, products) = seeded();
        let body = json!({
            "items": [{"product_id": products[0].id.as_str(), "quantity": 1}]
        });

        let response = post_json(router, "/api/orders", &body).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json_body(response).await["detail"].is_string());
        assert_eq!(store.order_count().await, 0);
    }

    #[tokio::test]
    async fn test_order_with_no_items_is_422() {
        let (_, router, _) = seeded();
        let response = post_json(router, "/api/orders", &order_body(&[])).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_unknown_order_is_404() {
        let (_, router, _) = seeded();
        let response = get(router, "/api/orders/invalid-id").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({"detail": "Order invalid-id not found"})
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_500_without_details() {
        let (store, router, _) = seeded();
        store.set_unavailable(true);

        let response = get(router, "/api/products").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(response).await,
            json!({"detail": "Internal server error"})
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (_, router, _) = seeded();
        for uri in ["/api/nope", "/nope", "/api/products/a/b"] {
            let response = get(router.clone(), uri).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(json_body(response).await, json!({"detail": "Not Found"}));
        }
    }

    #[tokio::test]
    async fn test_undecodable_path_segment_is_json_400() {
        let (_, router, _) = seeded();
        for uri in [
            "/api/products/%FF",
            "/api/products/category/%FF",
            "/api/orders/%FF",
        ] {
            let response = get(router.clone(), uri).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");

            let body = json_body(response).await;
            let detail = body["detail"].as_str().unwrap();
            assert!(detail.contains("Invalid UTF-8"), "{uri}: {detail}");
        }
    }
}
