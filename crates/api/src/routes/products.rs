//! Catalog route handlers.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::PathRejection},
    routing::get,
};

use mangal_chai_core::{Product, ProductId};

use crate::{error::Result, state::AppState};

/// Build the catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(index))
        .route("/products/{id}", get(show))
        .route("/products/category/{category}", get(by_category))
        .route("/categories", get(categories))
}

/// List every product.
///
/// # Errors
///
/// Returns 500 if the store cannot be read.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.catalog().list_products().await?))
}

/// Fetch one product by id.
///
/// # Errors
///
/// Returns 404 with `Product {id} not found` for an unknown id, or the path
/// rejection's status if the id segment cannot be decoded.
pub async fn show(
    State(state): State<AppState>,
    id: std::result::Result<Path<ProductId>, PathRejection>,
) -> Result<Json<Product>> {
    let Path(id) = id?;
    Ok(Json(state.catalog().get_product(&id).await?))
}

/// List products whose category matches exactly.
///
/// # Errors
///
/// Returns 500 if the store cannot be read, or the path rejection's status if
/// the category segment cannot be decoded.
pub async fn by_category(
    State(state): State<AppState>,
    category: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Product>>> {
    let Path(category) = category?;
    Ok(Json(
        state
            .catalog()
            .list_products_by_category(&category)
            .await?,
    ))
}

/// List distinct categories.
///
/// # Errors
///
/// Returns 500 if the store cannot be read.
pub async fn categories(State(state): State<AppState>) -> Result<Json<Vec<String>>> {
    Ok(Json(state.catalog().list_categories().await?))
}
