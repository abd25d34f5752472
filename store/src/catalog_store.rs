use std::sync::Arc;

use common::models::Catalog;
use tokio::sync::RwLock;
use tracing::debug;

/// Session-scoped holder of the current catalog snapshot.
///
/// Readers get an `Arc` to a complete snapshot. A reload swaps in a new
/// snapshot; a snapshot is never edited after it is published, so a reader
/// holding the previous one keeps a consistent view.
pub struct CatalogStore {
    current: RwLock<Arc<Catalog>>,
}

impl CatalogStore {
    pub fn new(initial: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// The snapshot currently published
    pub async fn snapshot(&self) -> Arc<Catalog> {
        self.current.read().await.clone()
    }

    /// Publishes `catalog`, returning the new snapshot.
    pub async fn replace(&self, catalog: Catalog) -> Arc<Catalog> {
        let next = Arc::new(catalog);
        let mut current = self.current.write().await;
        debug!(
            "Replacing catalog snapshot ({} {} entries -> {} {} entries)",
            current.origin,
            current.len(),
            next.origin,
            next.len()
        );
        *current = next.clone();
        next
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(Catalog::fallback())
    }
}
