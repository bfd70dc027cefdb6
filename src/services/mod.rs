//! Business logic services

pub mod catalog;
pub mod loans;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::catalog::Catalog;

/// The one catalog instance every service works on. Each operation holds the
/// lock for its whole lookup, check and mutate sequence.
pub type SharedCatalog = Arc<Mutex<Catalog>>;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub catalog: catalog::CatalogService,
    pub loans: loans::LoansService,
}

impl Services {
    /// Create all services around the given catalog
    pub fn new(catalog: Catalog) -> Self {
        let shared: SharedCatalog = Arc::new(Mutex::new(catalog));
        Self {
            catalog: catalog::CatalogService::new(shared.clone()),
            loans: loans::LoansService::new(shared),
        }
    }
}
