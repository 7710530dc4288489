use std::time::Duration;

use sea_orm::sqlx::sqlite::SqlitePoolOptions;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::errors::{Result, SluglinkError};
use migration::{Migrator, MigratorTrait};

/// In-memory databases live only as long as one of their connections does
fn is_in_memory_sqlite(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

/// Pool options for SQLite. An in-memory database keeps one connection open
/// for the pool's whole lifetime so the schema and rows are never dropped.
fn sqlite_pool_options(database_url: &str) -> SqlitePoolOptions {
    let options = SqlitePoolOptions::new();
    if is_in_memory_sqlite(database_url) {
        options
            .min_connections(1)
            .max_lifetime(None)
            .idle_timeout(None)
    } else {
        options
    }
}

/// 连接 SQLite 数据库（不存在时自动创建）
pub async fn connect_sqlite(database_url: &str) -> Result<DatabaseConnection> {
    use sea_orm::SqlxSqliteConnector;
    use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
    use std::str::FromStr;

    let opt = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| SluglinkError::database_config(format!("invalid SQLite URL: {}", e)))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    let pool = sqlite_pool_options(database_url)
        .connect_with(opt)
        .await
        .map_err(|e| {
            SluglinkError::database_connection(format!("cannot connect to SQLite database: {}", e))
        })?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// 连接通用数据库（MySQL/PostgreSQL）
///
/// Every statement checks a connection out of this pool and hands it back
/// when the statement future completes or is dropped.
pub async fn connect_generic(
    database_url: &str,
    backend_name: &str,
    pool_size: u32,
    timeout_secs: u64,
) -> Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(database_url.to_owned());
    opt.max_connections(pool_size.max(1))
        .min_connections(1)
        .connect_timeout(Duration::from_secs(timeout_secs))
        .acquire_timeout(Duration::from_secs(timeout_secs))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(false);

    Database::connect(opt).await.map_err(|e| {
        SluglinkError::database_connection(format!(
            "cannot connect to {} database: {}",
            backend_name.to_uppercase(),
            e
        ))
    })
}

/// 运行数据库迁移
pub async fn run_migrations(db: &DatabaseConnection) -> Result<()> {
    Migrator::up(db, None)
        .await
        .map_err(|e| SluglinkError::database_operation(format!("migration failed: {}", e)))?;

    info!("Database migrations completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_pool_keeps_a_connection() {
        let options = sqlite_pool_options("sqlite::memory:");
        assert_eq!(options.get_min_connections(), 1);
        assert!(options.get_max_lifetime().is_none());
        assert!(options.get_idle_timeout().is_none());
    }

    #[test]
    fn test_file_pool_uses_driver_defaults() {
        let options = sqlite_pool_options("sqlite://links.db?mode=rwc");
        assert_eq!(options.get_min_connections(), 0);
        assert!(options.get_max_lifetime().is_some());
    }

    #[test]
    fn test_is_in_memory_sqlite() {
        assert!(is_in_memory_sqlite("sqlite::memory:"));
        assert!(is_in_memory_sqlite("sqlite://file:links?mode=memory&cache=shared"));
        assert!(!is_in_memory_sqlite("sqlite://links.db?mode=rwc"));
    }
}
