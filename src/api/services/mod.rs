pub mod frontend;
pub mod health;
pub mod links;
pub mod redirect;

use actix_web::{HttpRequest, HttpResponse, error, web};

use crate::errors::ErrorBody;

pub use frontend::{FrontendService, frontend_routes};
pub use health::{AppStartTime, HealthService};
pub use links::{RegistrationService, SlugResponse, api_routes};
pub use redirect::{RedirectService, redirect_routes};

/// JSON extractor config: body size limit and `{"error": ...}` rejections
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req: &HttpRequest| {
            let message = format!("invalid JSON body: {}", err);
            let response = HttpResponse::BadRequest()
                .insert_header(("Content-Type", "application/json; charset=utf-8"))
                .json(ErrorBody { error: &message });
            error::InternalError::from_response(err, response).into()
        })
}

/// Register every route. Order matters: `/api` and `/` must be matched
/// before the catch-all slug scope.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(api_routes())
        .service(frontend_routes())
        .service(redirect_routes());
}
