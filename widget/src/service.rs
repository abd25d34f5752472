use std::sync::Arc;

use common::models::{Catalog, CatalogOrigin};
use connectors::CatalogSource;
use store::CatalogStore;
use tracing::{debug, error, info, warn};

/// Loads the currency catalog and publishes it to the session store
pub struct CatalogService {
    /// Remote catalog service
    source: Arc<dyn CatalogSource>,
    /// Current catalog snapshot
    store: Arc<CatalogStore>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>, store: Arc<CatalogStore>) -> Self {
        Self { source, store }
    }

    /// Fetches the catalog and publishes it. Never fails: any problem with the
    /// service yields the static fallback list. No retry is attempted.
    pub async fn load_catalog(&self) -> Arc<Catalog> {
        let catalog = match self.source.fetch_currencies().await {
            Ok(names) => {
                let catalog = Catalog::from_names(names, CatalogOrigin::Service);
                if catalog.is_empty() {
                    warn!("Currency catalog service returned no currencies, using fallback list");
                    Catalog::fallback()
                } else {
                    catalog
                }
            }
            Err(e) => {
                error!("Error fetching currencies: {}", e);
                Catalog::fallback()
            }
        };

        info!(
            "Loaded {} currencies from {}",
            catalog.len(),
            catalog.origin
        );
        self.store.replace(catalog).await
    }

    /// The snapshot currently published
    pub async fn current(&self) -> Arc<Catalog> {
        debug!("Reading current catalog snapshot");
        self.store.snapshot().await
    }
}
