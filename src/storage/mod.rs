use std::sync::Arc;

use crate::errors::Result;

pub mod backend;
pub mod models;

pub use backend::LinkStore;
pub use models::{Link, LinkKind, LinkTarget};

pub struct StorageFactory;

impl StorageFactory {
    /// Connect using the `[database]` section of the loaded config.
    ///
    /// The schema is not touched here; callers run [`LinkStore::ensure_schema`].
    pub async fn create() -> Result<Arc<LinkStore>> {
        let config = crate::config::get_config();
        let database = &config.database;

        let store =
            LinkStore::connect(&database.database_url, database.pool_size, database.timeout)
                .await?;
        Ok(Arc::new(store))
    }
}
