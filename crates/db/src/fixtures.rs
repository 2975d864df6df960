use rust_decimal::Decimal;
use tracing::info;

use catalog_core::domain::product::{Product, ProductId};

use crate::repositories::{ProductRepository, RepositoryError};

/// Canonical sample products, created in this order at startup.
const SAMPLE_PRODUCTS: &[SampleProductContract] = &[
    SampleProductContract {
        expected_id: 1,
        name: "Laptop",
        description: "High-performance laptop",
        price_cents: 99_999,
        stock: 10,
        category: "Electronics",
    },
    SampleProductContract {
        expected_id: 2,
        name: "Mouse",
        description: "Wireless mouse",
        price_cents: 2_999,
        stock: 50,
        category: "Electronics",
    },
    SampleProductContract {
        expected_id: 3,
        name: "Keyboard",
        description: "Mechanical keyboard",
        price_cents: 7_999,
        stock: 30,
        category: "Electronics",
    },
];

/// Deterministic startup dataset for the catalog store.
pub struct SampleCatalog;

impl SampleCatalog {
    pub fn products() -> Vec<Product> {
        SAMPLE_PRODUCTS.iter().map(SampleProductContract::to_product).collect()
    }

    /// Create every sample product through the repository, in contract order.
    pub async fn load(repo: &dyn ProductRepository) -> Result<SeedResult, RepositoryError> {
        let mut products_seeded = Vec::with_capacity(SAMPLE_PRODUCTS.len());

        for product in Self::products() {
            let stored = repo.create(product).await?;
            products_seeded.push(SeededProduct { id: stored.id, name: stored.name });
        }

        info!(
            event_name = "catalog.seed.loaded",
            correlation_id = "bootstrap",
            product_count = products_seeded.len(),
            "sample products seeded"
        );

        Ok(SeedResult { products_seeded })
    }

    /// Check that each sample product sits at its expected identifier.
    pub async fn verify(
        repo: &dyn ProductRepository,
    ) -> Result<VerificationResult, RepositoryError> {
        let mut checks = Vec::with_capacity(SAMPLE_PRODUCTS.len());

        for contract in SAMPLE_PRODUCTS {
            let expected = contract.to_product().with_id(ProductId(contract.expected_id));
            let found = repo.find_by_id(expected.id).await?;
            checks.push((contract.name, found.as_ref() == Some(&expected)));
        }

        let all_present = checks.iter().all(|(_, present)| *present);
        Ok(VerificationResult { all_present, checks })
    }
}

#[derive(Debug, Clone, Copy)]
struct SampleProductContract {
    expected_id: i32,
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    stock: i32,
    category: &'static str,
}

impl SampleProductContract {
    fn to_product(&self) -> Product {
        Product {
            id: ProductId::default(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            price: Decimal::new(self.price_cents, 2),
            stock: self.stock,
            category: Some(self.category.to_string()),
            image_url: None,
        }
    }
}

#[derive(Debug)]
pub struct SeedResult {
    pub products_seeded: Vec<SeededProduct>,
}

impl SeedResult {
    pub fn ids(&self) -> Vec<ProductId> {
        self.products_seeded.iter().map(|product| product.id).collect()
    }
}

#[derive(Debug)]
pub struct SeededProduct {
    pub id: ProductId,
    pub name: String,
}

#[derive(Debug)]
pub struct VerificationResult {
    pub all_present: bool,
    pub checks: Vec<(&'static str, bool)>,
}
