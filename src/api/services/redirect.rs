use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use tracing::{debug, trace};

use crate::errors::SluglinkError;
use crate::services::LinkService;
use crate::storage::LinkTarget;

pub struct RedirectService;

impl RedirectService {
    /// `GET /{slug}`: redirect for URL links, JSON body for profiles.
    ///
    /// Dispatch follows the stored kind; the target text is never sniffed.
    pub async fn handle_redirect(
        path: web::Path<String>,
        service: web::Data<Arc<LinkService>>,
    ) -> Result<HttpResponse, SluglinkError> {
        let slug = path.into_inner();

        match service.resolve(&slug).await? {
            Some(link) => match link.target {
                LinkTarget::Url(url) => {
                    trace!("Redirecting {} -> {}", slug, url);
                    Ok(Self::redirect_response(&url))
                }
                LinkTarget::Profile(document) => Ok(HttpResponse::Ok()
                    .insert_header(("Content-Type", "application/json; charset=utf-8"))
                    .json(document)),
            },
            None => {
                debug!("Slug not found: {}", slug);
                Ok(Self::not_found_response())
            }
        }
    }

    #[inline]
    fn redirect_response(url: &str) -> HttpResponse {
        HttpResponse::build(StatusCode::FOUND)
            .insert_header(("Location", url))
            .finish()
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        HttpResponse::build(StatusCode::NOT_FOUND)
            .insert_header(("Content-Type", "text/plain; charset=utf-8"))
            .body("Not found")
    }
}

/// Redirect 路由配置
pub fn redirect_routes() -> actix_web::Scope {
    web::scope("")
        .route("/{slug}", web::get().to(RedirectService::handle_redirect))
        .route("/{slug}", web::head().to(RedirectService::handle_redirect))
}
