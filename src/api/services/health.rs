use std::sync::Arc;
use std::time::Duration;

use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::{error, trace};

use crate::storage::LinkStore;

/// Upper bound for the database ping
const PING_TIMEOUT: Duration = Duration::from_secs(5);

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: DatabaseHealth,
    pub uptime_secs: i64,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub status: &'static str,
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        storage: web::Data<Arc<LinkStore>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> HttpResponse {
        trace!("Received health check request");

        let backend = storage.backend_name().to_string();
        let database = match tokio::time::timeout(PING_TIMEOUT, storage.ping()).await {
            Ok(Ok(())) => DatabaseHealth {
                status: "healthy",
                backend,
                error: None,
            },
            Ok(Err(e)) => {
                error!("Storage health check failed: {}", e);
                DatabaseHealth {
                    status: "unhealthy",
                    backend,
                    error: Some(e.message().to_string()),
                }
            }
            Err(_) => {
                error!("Storage health check timeout");
                DatabaseHealth {
                    status: "unhealthy",
                    backend,
                    error: Some("timeout".to_string()),
                }
            }
        };

        let healthy = database.error.is_none();
        let response = HealthResponse {
            status: if healthy { "healthy" } else { "unhealthy" },
            database,
            uptime_secs: (chrono::Utc::now() - app_start_time.start_datetime).num_seconds(),
        };

        if healthy {
            HttpResponse::Ok().json(response)
        } else {
            HttpResponse::ServiceUnavailable().json(response)
        }
    }
}
