//! Business logic services.
//!
//! # Services
//!
//! - `catalog` - Product listing, lookup and category queries
//! - `orders` - Order validation, pricing, persistence and lookup
//!
//! Services receive their stores at construction time; nothing here reaches
//! for a global connection.

pub mod catalog;
pub mod error;
pub mod orders;

pub use catalog::CatalogService;
pub use error::ServiceError;
pub use orders::OrderService;
