//! Service error types.

use thiserror::Error;

use mangal_chai_core::{OrderId, OrderValidationError, PriceError, ProductId};

use crate::db::RepositoryError;

/// Errors that can occur in catalog and order operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No product has the requested id.
    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    /// No order has the requested id.
    #[error("Order {0} not found")]
    OrderNotFound(OrderId),

    /// The product exists but cannot be ordered right now.
    #[error("Product {name} is out of stock")]
    OutOfStock {
        /// Id of the unavailable product.
        product_id: ProductId,
        /// Display name, used in the client-facing message.
        name: String,
    },

    /// The order request is structurally invalid.
    #[error("{0}")]
    InvalidOrder(#[from] OrderValidationError),

    /// Line or order totals left the representable range.
    #[error("order total out of range: {0}")]
    TotalOutOfRange(#[from] PriceError),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}
