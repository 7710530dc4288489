//! SeaORM storage backend
//!
//! One table, `links`, on SQLite, MySQL/MariaDB or PostgreSQL. The schema is
//! applied by [`LinkStore::ensure_schema`], which startup calls explicitly
//! before the HTTP server binds.

mod connection;
mod converters;
mod mutations;
mod query;

use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::errors::{Result, SluglinkError};

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{link_to_active_model, model_to_link};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(SluglinkError::database_config(format!(
            "cannot infer database type from URL: {}. Supported schemes: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// Bare file paths (`links.db`) and `:memory:` are turned into sqlx URLs
fn normalize_sqlite_url(database_url: &str) -> String {
    if database_url.starts_with("sqlite:") {
        database_url.to_string()
    } else if database_url == ":memory:" {
        "sqlite::memory:".to_string()
    } else {
        format!("sqlite://{}", database_url)
    }
}

/// SeaORM-based link store
#[derive(Clone)]
pub struct LinkStore {
    db: DatabaseConnection,
    backend_name: String,
}

impl LinkStore {
    /// Open the database. Does not touch the schema.
    pub async fn connect(database_url: &str, pool_size: u32, timeout_secs: u64) -> Result<Self> {
        if database_url.is_empty() {
            return Err(SluglinkError::database_config(
                "DATABASE_URL is not set".to_string(),
            ));
        }

        let backend_name = infer_backend_from_url(database_url)?;

        let db = if backend_name == "sqlite" {
            connect_sqlite(&normalize_sqlite_url(database_url)).await?
        } else {
            connect_generic(database_url, &backend_name, pool_size, timeout_secs).await?
        };

        info!("{} storage connected", backend_name.to_uppercase());
        Ok(Self { db, backend_name })
    }

    /// Create the `links` table if it does not exist yet. Idempotent.
    pub async fn ensure_schema(&self) -> Result<()> {
        run_migrations(&self.db).await
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// 获取数据库连接（测试和迁移场景下直接访问数据库）
    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Release the pool. Statements issued afterwards fail.
    pub async fn close(&self) {
        if let Err(e) = self.db.clone().close().await {
            warn!("Failed to close {} storage: {}", self.backend_name, e);
        } else {
            info!("{} storage closed", self.backend_name.to_uppercase());
        }
    }
}
