//! `api.echo_short_link = true`
//!
//! Lives in its own test binary because the configuration is process-global.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::{Value, json};
use tempfile::TempDir;

use sluglink::api::services::{AppStartTime, configure_routes, json_config};
use sluglink::config::{StaticConfig, init_config_with};
use sluglink::services::LinkService;
use sluglink::storage::LinkStore;

#[actix_rt::test]
async fn test_shortener_echoes_short_link() {
    let mut config = StaticConfig::default();
    config.api.echo_short_link = true;
    init_config_with(config);

    let temp_dir = TempDir::new().unwrap();
    let db_url = format!(
        "sqlite://{}?mode=rwc",
        temp_dir.path().join("echo.db").display()
    );
    let storage = Arc::new(LinkStore::connect(&db_url, 1, 8).await.unwrap());
    storage.ensure_schema().await.unwrap();

    let service = Arc::new(LinkService::new(storage.clone()));
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(service))
            .app_data(web::Data::new(AppStartTime::now()))
            .app_data(json_config(64 * 1024))
            .configure(configure_routes),
    )
    .await;

    let req = TestRequest::post()
        .uri("/api/shortener")
        .insert_header(("Host", "sl.test"))
        .set_json(json!({"url": "https://example.com", "slug": "ex"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["slug"], "ex");
    assert_eq!(body["short_link"], "http://sl.test/ex");

    // 其他注册接口不回显
    let req = TestRequest::post()
        .uri("/api/profile")
        .insert_header(("Host", "sl.test"))
        .set_json(json!({"slug": "me"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"slug": "me"}));
}
