use actix_web::{HttpResponse, web};
use rust_embed::Embed;
use tracing::{error, trace};

// 使用 RustEmbed 自动嵌入静态文件
#[derive(Embed)]
#[folder = "static/"]
struct StaticAssets;

pub struct FrontendService;

impl FrontendService {
    /// Landing page, with the running version substituted in.
    pub async fn handle_index() -> HttpResponse {
        trace!("Serving index page");

        match StaticAssets::get("index.html") {
            Some(content) => {
                let html = String::from_utf8_lossy(&content.data)
                    .replace("%SLUGLINK_VERSION%", env!("CARGO_PKG_VERSION"));

                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }
            None => {
                error!("index.html missing from embedded assets");
                HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body("index page unavailable")
            }
        }
    }
}

pub fn frontend_routes() -> actix_web::Resource {
    web::resource("/")
        .route(web::get().to(FrontendService::handle_index))
        .route(web::head().to(FrontendService::handle_index))
}
