use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::get_config;
use crate::services::LinkService;
use crate::storage::{LinkStore, StorageFactory};
use crate::utils::build_map_search_url;

pub struct StartupContext {
    pub storage: Arc<LinkStore>,
    pub link_service: Arc<LinkService>,
}

/// 准备服务器启动的上下文
///
/// Connects to the database and applies the schema. Runs to completion
/// before any listener is bound, so no request ever sees a missing table.
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let config = get_config();

    // 提前校验地址模板，避免在第一次请求时才发现配置错误
    build_map_search_url(&config.address.map_search_base, "").with_context(|| {
        format!(
            "address.map_search_base is not a valid URL: {}",
            config.address.map_search_base
        )
    })?;

    let storage = StorageFactory::create()
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    storage
        .ensure_schema()
        .await
        .context("Failed to apply database schema")?;

    let link_service = Arc::new(
        LinkService::new(storage.clone()).with_map_search_base(&config.address.map_search_base),
    );

    info!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        storage,
        link_service,
    })
}
