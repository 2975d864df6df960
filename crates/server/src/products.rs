//! Product catalog routes.
//!
//! - `GET  /products/{product_id}`          — fetch one product (JSON)
//! - `POST /products/{product_id}/details`  — replace a product's details (204)

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use catalog_core::{ApplicationError, DomainError, Product, ProductId};
use catalog_db::ProductRepository;
use tracing::info;

use crate::error::ApiError;

#[derive(Clone)]
pub struct CatalogState {
    products: Arc<dyn ProductRepository>,
}

impl CatalogState {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }
}

pub fn router(products: Arc<dyn ProductRepository>) -> Router {
    Router::new()
        .route("/products/{product_id}", get(get_product))
        .route("/products/{product_id}/details", post(replace_product_details))
        .with_state(CatalogState::new(products))
}

pub async fn get_product(
    path: Result<Path<String>, PathRejection>,
    State(state): State<CatalogState>,
) -> Result<Json<Product>, ApiError> {
    let id = product_id(path)?;

    let product =
        state.products.find_by_id(id).await?.ok_or(ApplicationError::ProductNotFound(id))?;

    Ok(Json(product))
}

/// The body is decoded from raw bytes whatever its declared content type; any
/// failure to read or decode it is a 400.
pub async fn replace_product_details(
    path: Result<Path<String>, PathRejection>,
    State(state): State<CatalogState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<StatusCode, ApiError> {
    let id = product_id(path)?;

    let body = body.map_err(|rejection| ApplicationError::MalformedPayload(rejection.body_text()))?;
    let product = decode_product(&body)?;
    product.validate()?;

    let stored =
        state.products.replace(id, product).await?.ok_or(ApplicationError::ProductNotFound(id))?;

    info!(
        event_name = "catalog.product.replaced",
        product_id = %stored.id,
        product_name = %stored.name,
        "product details replaced"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// A segment axum cannot extract (for example invalid percent-encoded UTF-8)
/// is reported like any other malformed identifier.
fn product_id(path: Result<Path<String>, PathRejection>) -> Result<ProductId, ApiError> {
    let Path(raw) =
        path.map_err(|rejection| DomainError::InvalidProductId { raw: rejection.body_text() })?;
    Ok(raw.parse()?)
}

fn decode_product(body: &[u8]) -> Result<Product, ApplicationError> {
    serde_json::from_slice::<Product>(body)
        .map_err(|error| ApplicationError::MalformedPayload(error.to_string()))
}
