//! Order records and the order request they are built from.
//!
//! An [`Order`] never references the live catalog: each [`LineItem`] copies the
//! product name and price at the moment the order is placed, so later catalog
//! changes leave historical orders untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{OrderId, OrderStatus, Price, PriceError, Product, ProductId};

/// Errors found while structurally validating a [`NewOrder`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderValidationError {
    /// The order has no line items.
    #[error("order must contain at least one item")]
    NoItems,
    /// A line item asks for zero units.
    #[error("quantity for product {0} must be at least 1")]
    ZeroQuantity(ProductId),
}

/// Contact and delivery details supplied with an order.
///
/// All fields are required; none are format-checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// A requested product and quantity, as submitted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// An order as submitted, before it is checked against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_info: CustomerInfo,
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewOrder {
    /// Check the request shape without touching the catalog.
    ///
    /// # Errors
    ///
    /// Returns the first structural problem found, in item order.
    pub fn validate(&self) -> Result<(), OrderValidationError> {
        if self.items.is_empty() {
            return Err(OrderValidationError::NoItems);
        }
        if let Some(item) = self.items.iter().find(|item| item.quantity == 0) {
            return Err(OrderValidationError::ZeroQuantity(item.product_id.clone()));
        }
        Ok(())
    }
}

/// A line of a placed order, snapshotted from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub product_name: String,
    /// Unit price at order time.
    pub price: Price,
    pub quantity: u32,
    /// `price * quantity`.
    pub subtotal: Price,
}

impl LineItem {
    /// Snapshot `product` for `quantity` units.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the subtotal is out of range.
    pub fn snapshot(product: &Product, quantity: u32) -> Result<Self, PriceError> {
        Ok(Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            price: product.price,
            quantity,
            subtotal: product.price.times(quantity)?,
        })
    }
}

/// A placed order. Immutable once persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_info: CustomerInfo,
    pub items: Vec<LineItem>,
    pub total_amount: Price,
    #[serde(default)]
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Order {
    /// Build a pending order with a fresh id from already-snapshotted items.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the total is out of range.
    pub fn place(
        customer_info: CustomerInfo,
        items: Vec<LineItem>,
        notes: Option<String>,
        order_date: DateTime<Utc>,
    ) -> Result<Self, PriceError> {
        let total_amount = items
            .iter()
            .try_fold(Price::ZERO, |total, item| total.checked_add(item.subtotal))?;

        Ok(Self {
            id: OrderId::generate(),
            customer_info,
            items,
            total_amount,
            status: OrderStatus::Pending,
            order_date,
            notes,
        })
    }
}
