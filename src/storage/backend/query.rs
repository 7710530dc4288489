//! Query operations for LinkStore
//!
//! This module contains all read-only database operations.

use sea_orm::{EntityTrait, PaginatorTrait};
use tracing::trace;

use super::LinkStore;
use super::converters::model_to_link;
use crate::errors::{Result, SluglinkError};
use crate::storage::Link;

use migration::entities::link;

impl LinkStore {
    pub async fn lookup(&self, slug: &str) -> Result<Option<Link>> {
        let model = link::Entity::find_by_id(slug.to_string())
            .one(&self.db)
            .await
            .map_err(|e| {
                SluglinkError::database_operation(format!("lookup of slug '{}' failed: {}", slug, e))
            })?;

        trace!("Lookup {}: found={}", slug, model.is_some());
        model.map(model_to_link).transpose()
    }

    pub async fn count(&self) -> Result<u64> {
        link::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| SluglinkError::database_operation(format!("count failed: {}", e)))
    }

    /// 检查数据库连通性
    pub async fn ping(&self) -> Result<()> {
        self.db
            .ping()
            .await
            .map_err(|e| SluglinkError::database_connection(e.to_string()))
    }
}
