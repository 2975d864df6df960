use async_trait::async_trait;
use thiserror::Error;

use catalog_core::domain::product::{Product, ProductId};

pub mod memory;

pub use memory::InMemoryProductRepository;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("product identifier space exhausted after {last_assigned}")]
    IdSpaceExhausted { last_assigned: i32 },
}

/// Point access to the product catalog.
///
/// An absent identifier is an ordinary `Ok(None)`, never an error.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// Overwrites an existing record with `product`, forcing its identifier to `id`.
    /// Returns the stored record, or `None` without inserting when `id` is absent.
    async fn replace(
        &self,
        id: ProductId,
        product: Product,
    ) -> Result<Option<Product>, RepositoryError>;

    /// Stores `product` under the next sequential identifier and returns it.
    async fn create(&self, product: Product) -> Result<Product, RepositoryError>;
}
