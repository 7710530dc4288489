//! Mutation operations for LinkStore
//!
//! This module contains all write database operations.

use sea_orm::{EntityTrait, sea_query::OnConflict};
use tracing::info;

use super::LinkStore;
use super::converters::link_to_active_model;
use crate::errors::{Result, SluglinkError};
use crate::storage::Link;

use migration::entities::link;

impl LinkStore {
    /// 使用 ON CONFLICT 的原子 upsert（last write wins）
    ///
    /// One statement; both `kind` and `target` are replaced on conflict.
    pub async fn upsert(&self, new_link: &Link) -> Result<()> {
        let active_model = link_to_active_model(new_link)?;

        link::Entity::insert(active_model)
            .on_conflict(
                OnConflict::column(link::Column::Slug)
                    .update_columns([link::Column::Kind, link::Column::Target])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| {
                SluglinkError::database_operation(format!(
                    "upsert of slug '{}' failed: {}",
                    new_link.slug, e
                ))
            })?;

        info!("Link upserted: {} ({})", new_link.slug, new_link.kind());
        Ok(())
    }
}
