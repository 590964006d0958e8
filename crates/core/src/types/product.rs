//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A product in the tea catalog.
///
/// This is both the stored document and the API representation; the store's
/// own row identifiers never appear here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Application-assigned identifier, immutable once created.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Exact-match grouping key (e.g. "Black Tea").
    pub category: String,
    /// Not checked for reachability.
    pub image_url: String,
    /// Whether the product may currently be ordered.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    /// Pack size as displayed, e.g. "100g".
    #[serde(default = "default_weight")]
    pub weight: String,
}

const fn default_in_stock() -> bool {
    true
}

fn default_weight() -> String {
    "100g".to_owned()
}
