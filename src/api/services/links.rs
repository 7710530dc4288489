//! Registration endpoints: `/api/shortener`, `/api/address`, `/api/profile`

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;
use tracing::trace;

use super::health::HealthService;
use crate::config::get_config;
use crate::errors::SluglinkError;
use crate::services::{AddressRequest, LinkService, ProfileRequest, ShortenRequest};

#[derive(Debug, Serialize)]
pub struct SlugResponse {
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_link: Option<String>,
}

impl SlugResponse {
    fn new(slug: String) -> Self {
        Self {
            slug,
            short_link: None,
        }
    }
}

pub struct RegistrationService;

impl RegistrationService {
    pub async fn shortener(
        req: HttpRequest,
        body: web::Json<ShortenRequest>,
        service: web::Data<Arc<LinkService>>,
    ) -> Result<HttpResponse, SluglinkError> {
        trace!("Shortener request: {:?}", body);
        let link = service.shorten(body.into_inner()).await?;

        let mut response = SlugResponse::new(link.slug);
        if get_config().api.echo_short_link {
            response.short_link = Some(Self::short_link_for(&req, &response.slug));
        }
        Ok(HttpResponse::Ok().json(response))
    }

    pub async fn address(
        body: web::Json<AddressRequest>,
        service: web::Data<Arc<LinkService>>,
    ) -> Result<HttpResponse, SluglinkError> {
        trace!("Address request: {:?}", body);
        let link = service.register_address(body.into_inner()).await?;
        Ok(HttpResponse::Ok().json(SlugResponse::new(link.slug)))
    }

    pub async fn profile(
        body: web::Json<ProfileRequest>,
        service: web::Data<Arc<LinkService>>,
    ) -> Result<HttpResponse, SluglinkError> {
        trace!("Profile request for slug {:?}", body.slug);
        let link = service.register_profile(body.into_inner()).await?;
        Ok(HttpResponse::Ok().json(SlugResponse::new(link.slug)))
    }

    /// Absolute short URL as seen by the client (honours `Forwarded`/`X-Forwarded-*`)
    fn short_link_for(req: &HttpRequest, slug: &str) -> String {
        let info = req.connection_info();
        format!("{}://{}/{}", info.scheme(), info.host(), slug)
    }
}

/// `/api` 路由配置
pub fn api_routes() -> actix_web::Scope {
    web::scope("/api")
        .route("/shortener", web::post().to(RegistrationService::shortener))
        .route("/address", web::post().to(RegistrationService::address))
        .route("/profile", web::post().to(RegistrationService::profile))
        .route("/health", web::get().to(HealthService::health_check))
        .route("/health", web::head().to(HealthService::health_check))
}
