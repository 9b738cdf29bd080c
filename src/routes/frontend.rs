use actix_web::{http::Method, web, HttpRequest, HttpResponse};
use crate::routes::track::AppState;

/// Serve the landing page for any path without its own route
pub async fn index(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return HttpResponse::MethodNotAllowed().finish();
    }

    match tokio::fs::read(state.index_file.as_ref()).await {
        Ok(page) => HttpResponse::Ok().content_type("text/html; charset=utf-8").body(page),
        Err(e) => {
            tracing::warn!("Failed to read frontend page {}: {}", state.index_file, e);
            HttpResponse::NotFound().content_type("text/plain; charset=utf-8").body("Not Found")
        }
    }
}
