//! Core types for Mangal Chai.
//!
//! This module provides type-safe wrappers for the catalog and ordering domain.

pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod status;

pub use id::*;
pub use order::{CartItem, CustomerInfo, LineItem, NewOrder, Order, OrderValidationError};
pub use price::{Price, PriceError};
pub use product::Product;
pub use status::OrderStatus;
