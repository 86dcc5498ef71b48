//! Repository factory for dependency injection.
//!
//! The binary asks the factory for a repository once at start-up and passes
//! the resulting trait object to the HTTP state.

use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::ResultRepository;
use crate::config::StoreSettings;

/// Repository factory for creating repository instances.
///
/// # Example
/// ```
/// use gradebook::config::StoreSettings;
/// use gradebook::db::RepositoryFactory;
///
/// let repo = RepositoryFactory::from_settings(&StoreSettings { seed_sample_data: true });
/// # let _ = repo;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an empty in-memory local repository.
    pub fn create_local() -> Arc<dyn ResultRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create an in-memory repository pre-loaded with sample results.
    pub fn create_seeded() -> Arc<dyn ResultRepository> {
        Arc::new(LocalRepository::with_sample_data())
    }

    /// Create the repository described by the `[store]` config section.
    pub fn from_settings(settings: &StoreSettings) -> Arc<dyn ResultRepository> {
        if settings.seed_sample_data {
            Self::create_seeded()
        } else {
            Self::create_local()
        }
    }
}
