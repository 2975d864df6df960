pub mod fixtures;
pub mod repositories;

pub use fixtures::{SampleCatalog, SeedResult, SeededProduct, VerificationResult};
pub use repositories::{InMemoryProductRepository, ProductRepository, RepositoryError};
