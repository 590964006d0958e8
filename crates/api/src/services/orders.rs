//! Order placement and lookup.
//!
//! Placing an order is validate-then-insert: every requested product is
//! looked up in submission order, the first failure rejects the whole order,
//! and only a fully priced order reaches the store as one document write.
//! Stock is a boolean flag with no reservation, so two concurrent orders for
//! the same in-stock product are both accepted.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};

use mangal_chai_core::{LineItem, NewOrder, Order, OrderId};

use super::ServiceError;
use crate::db::{OrderStore, ProductStore};

/// Creates and retrieves orders.
#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderStore>,
    products: Arc<dyn ProductStore>,
}

impl OrderService {
    /// Create an order service over injected order and product stores.
    #[must_use]
    pub fn new(orders: Arc<dyn OrderStore>, products: Arc<dyn ProductStore>) -> Self {
        Self { orders, products }
    }

    /// Validate `request` against the catalog, price it, and persist it.
    ///
    /// Structural checks run before any product lookup.
    ///
    /// # Errors
    ///
    /// - `ServiceError::InvalidOrder` if the request has no items or a zero quantity
    /// - `ServiceError::ProductNotFound` for the first unknown product id
    /// - `ServiceError::OutOfStock` for the first product that is not in stock
    /// - `ServiceError::Repository` if a store call fails
    #[instrument(skip(self, request), fields(items = request.items.len()))]
    pub async fn create_order(&self, request: NewOrder) -> Result<Order, ServiceError> {
        request.validate()?;

        let mut line_items = Vec::with_capacity(request.items.len());
        for item in &request.items {
            let product = self
                .products
                .get(&item.product_id)
                .await?
                .ok_or_else(|| {
                    warn!(product_id = %item.product_id, "order references unknown product");
                    ServiceError::ProductNotFound(item.product_id.clone())
                })?;

            if !product.in_stock {
                warn!(product_id = %product.id, "order references out-of-stock product");
                return Err(ServiceError::OutOfStock {
                    product_id: product.id,
                    name: product.name,
                });
            }

            line_items.push(LineItem::snapshot(&product, item.quantity)?);
        }

        let order = Order::place(request.customer_info, line_items, request.notes, Utc::now())?;
        self.orders.insert(&order).await?;

        info!(
            order_id = %order.id,
            total_amount = %order.total_amount,
            items = order.items.len(),
            "order created"
        );
        Ok(order)
    }

    /// The order with `id`.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::OrderNotFound` if no order has that id.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_order(&self, id: &OrderId) -> Result<Order, ServiceError> {
        self.orders
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::OrderNotFound(id.clone()))
    }
}
