use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::config::Settings;
use crate::core::{validate_query, Tracker};
use crate::models::TrackQuery;
use crate::services::TrackmageClient;
use std::sync::Arc;
use tracing::Instrument;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<Tracker<TrackmageClient>>,
    pub strict_validation: bool,
    pub index_file: Arc<str>,
}

impl AppState {
    /// Wire the tracker from settings around a shared HTTP client
    pub fn new(settings: &Settings, client: reqwest::Client) -> Self {
        let upstream = TrackmageClient::new(client, &settings.upstream);

        Self {
            tracker: Arc::new(Tracker::from_settings(upstream, &settings.tracking)),
            strict_validation: settings.tracking.strict_validation,
            index_file: settings.frontend.index_file.as_str().into(),
        }
    }
}

/// Configure tracking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/track", web::get().to(track))
        .route("/health", web::get().to(health_check));
}

/// Liveness probe
async fn health_check() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("OK")
}

/// Track a shipment
///
/// GET /track?number=ENE083992448MY[&carrier=poslaju]
///
/// Success body:
/// ```json
/// {
///   "success": true,
///   "trackingNumber": "ENE083992448MY",
///   "carrier": "Pos Malaysia",
///   "status": "Delivered",
///   "events": [{ "date": "...", "status": "...", "location": "..." }],
///   "processingTimeMs": 412,
///   "carrierUsed": "poslaju"
/// }
/// ```
async fn track(state: web::Data<AppState>, query: web::Query<TrackQuery>) -> HttpResponse {
    let request = match validate_query(&query, state.strict_validation) {
        Ok(request) => request,
        Err(e) => {
            tracing::info!("Rejected tracking request: {}", e);
            return HttpResponse::BadRequest().json(e.to_response());
        }
    };

    let span = tracing::info_span!(
        "track",
        request_id = %uuid::Uuid::new_v4(),
        number = %request.number
    );

    match state.tracker.track(&request).instrument(span).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(failure) => {
            let body = failure.to_response(chrono::Utc::now());
            let status = StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            tracing::error!("Tracking failed for {} with status {}: {:?}", request.number, status, failure);
            HttpResponse::build(status).json(body)
        }
    }
}
