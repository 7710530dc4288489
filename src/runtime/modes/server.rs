//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_web::{
    App, HttpServer,
    middleware::{Compress, DefaultHeaders},
    web,
};
use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::api::middleware::TimingMiddleware;
use crate::api::services::{AppStartTime, configure_routes, json_config};
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// This function:
/// 1. Connects storage and applies the schema
/// 2. Configures and binds the HTTP server
/// 3. Serves until actix receives a shutdown signal, then closes the pool
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let app_start_time = AppStartTime::now();

    let startup = lifetime::startup::prepare_server_startup()
        .await
        .inspect_err(|e| tracing::error!("Server startup failed: {:#}", e))?;

    let storage = startup.storage.clone();
    let link_service = startup.link_service.clone();

    let config = crate::config::get_config();
    let workers = config.server.workers.clamp(1, 32);
    let max_payload = config.api.max_payload_bytes;
    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    warn!("Using {} workers for the server", workers);

    let server = HttpServer::new({
        let storage = storage.clone();
        move || {
            App::new()
                .wrap(TimingMiddleware)
                .wrap(Compress::default())
                .wrap(DefaultHeaders::new().add(("Cache-Control", "no-store")))
                .app_data(web::Data::new(storage.clone()))
                .app_data(web::Data::new(link_service.clone()))
                .app_data(web::Data::new(app_start_time.clone()))
                .app_data(json_config(max_payload))
                .configure(configure_routes)
        }
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .workers(workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?;

    warn!("Starting server at http://{}", bind_address);
    let result = server.run().await;

    info!("Server stopped, releasing storage");
    storage.close().await;

    result.context("HTTP server terminated with an error")
}
