use std::sync::Arc;

use catalog_core::config::{AppConfig, ConfigError, LoadOptions};
use catalog_db::{InMemoryProductRepository, ProductRepository, RepositoryError, SampleCatalog};
use thiserror::Error;
use tracing::info;

pub struct Application {
    pub config: AppConfig,
    pub products: Arc<dyn ProductRepository>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("sample catalog seeding failed: {0}")]
    Seed(#[source] RepositoryError),
    #[error("sample catalog verification failed for: {0}")]
    SeedVerification(String),
}

pub async fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config).await
}

pub async fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );

    let repo = Arc::new(InMemoryProductRepository::default());

    if config.catalog.seed_sample_data {
        let seeded = SampleCatalog::load(&*repo).await.map_err(BootstrapError::Seed)?;

        let verification =
            SampleCatalog::verify(&*repo).await.map_err(BootstrapError::Seed)?;
        if !verification.all_present {
            let failed = verification
                .checks
                .iter()
                .filter_map(|(check, passed)| (!passed).then_some(*check))
                .collect::<Vec<_>>();
            return Err(BootstrapError::SeedVerification(failed.join(", ")));
        }

        let ids = seeded.ids().iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        info!(
            event_name = "system.bootstrap.catalog_seeded",
            correlation_id = "bootstrap",
            product_count = seeded.products_seeded.len(),
            "initial products seeded: {} products available (IDs: {ids})",
            seeded.products_seeded.len()
        );
    } else {
        info!(
            event_name = "system.bootstrap.catalog_empty",
            correlation_id = "bootstrap",
            "sample data seeding disabled; catalog starts empty"
        );
    }

    Ok(Application { config, products: repo })
}

#[cfg(test)]
mod tests {
    use catalog_core::config::{ConfigOverrides, LoadOptions};
    use catalog_core::ProductId;
    use catalog_db::ProductRepository;

    use crate::bootstrap::bootstrap;

    fn options(seed_sample_data: bool) -> LoadOptions {
        LoadOptions {
            overrides: ConfigOverrides {
                seed_sample_data: Some(seed_sample_data),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        }
    }

    #[tokio::test]
    async fn bootstrap_seeds_three_sample_products() {
        let app = bootstrap(options(true)).await.expect("bootstrap should succeed");

        for (id, name) in [(1, "Laptop"), (2, "Mouse"), (3, "Keyboard")] {
            let product = app
                .products
                .find_by_id(ProductId(id))
                .await
                .expect("find")
                .expect("seeded product present");
            assert_eq!(product.name, name);
        }
        assert_eq!(app.products.find_by_id(ProductId(4)).await.expect("find"), None);
    }

    #[tokio::test]
    async fn bootstrap_without_seeding_starts_empty() {
        let app = bootstrap(options(false)).await.expect("bootstrap should succeed");

        assert_eq!(app.products.find_by_id(ProductId(1)).await.expect("find"), None);
    }

    #[tokio::test]
    async fn bootstrap_fails_fast_on_invalid_config() {
        let result = bootstrap(LoadOptions {
            overrides: ConfigOverrides { port: Some(0), ..ConfigOverrides::default() },
            ..LoadOptions::default()
        })
        .await;

        let message = result.err().expect("error").to_string();
        assert!(message.contains("server.port"));
    }
}
