//! Order route handlers.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    routing::{get, post},
};
use serde::Serialize;

use mangal_chai_core::{NewOrder, Order, OrderId, Price};

use crate::{error::Result, state::AppState};

/// Build the orders router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create))
        .route("/orders/{id}", get(show))
}

/// Response for a placed order.
#[derive(Debug, Serialize)]
pub struct OrderConfirmation {
    pub message: &'static str,
    pub order_id: OrderId,
    pub total_amount: Price,
}

/// Place an order.
///
/// The body is taken as a `Result` so that rejections are answered with the
/// same `{"detail": ...}` body as every other error.
///
/// # Errors
///
/// - 422 if the body lacks required fields or the order is structurally invalid
/// - 404 if an item names an unknown product
/// - 400 if an item names a product that is out of stock
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewOrder>, JsonRejection>,
) -> Result<Json<OrderConfirmation>> {
    let Json(request) = payload?;
    let order = state.orders().create_order(request).await?;

    Ok(Json(OrderConfirmation {
        message: "Order placed successfully",
        order_id: order.id,
        total_amount: order.total_amount,
    }))
}

/// Fetch one order by id.
///
/// # Errors
///
/// Returns 404 for an unknown id, or the path rejection's status if the id
/// segment cannot be decoded.
pub async fn show(
    State(state): State<AppState>,
    id: std::result::Result<Path<OrderId>, PathRejection>,
) -> Result<Json<Order>> {
    let Path(id) = id?;
    Ok(Json(state.orders().get_order(&id).await?))
}
