use std::collections::HashMap;

use tokio::sync::RwLock;

use catalog_core::domain::product::{Product, ProductId};

use super::{ProductRepository, RepositoryError};

/// The process-wide catalog store.
///
/// Reads share the lock; `replace` and `create` hold it exclusively for the
/// whole check-and-write, so no reader can observe a partially written record
/// and concurrent replaces of one identifier are totally ordered.
pub struct InMemoryProductRepository {
    state: RwLock<CatalogState>,
}

struct CatalogState {
    products: HashMap<ProductId, Product>,
    // Widened so that assigning `i32::MAX` does not overflow the counter.
    next_id: i64,
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl InMemoryProductRepository {
    fn starting_at(next_id: i64) -> Self {
        Self { state: RwLock::new(CatalogState { products: HashMap::new(), next_id }) }
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.products.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.products.get(&id).cloned())
    }

    async fn replace(
        &self,
        id: ProductId,
        product: Product,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut state = self.state.write().await;
        let Some(slot) = state.products.get_mut(&id) else {
            return Ok(None);
        };

        *slot = product.with_id(id);
        Ok(Some(slot.clone()))
    }

    async fn create(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut state = self.state.write().await;
        let id = i32::try_from(state.next_id)
            .map(ProductId)
            .map_err(|_| RepositoryError::IdSpaceExhausted { last_assigned: i32::MAX })?;

        let stored = product.with_id(id);
        state.products.insert(id, stored.clone());
        state.next_id += 1;
        Ok(stored)
    }
}
