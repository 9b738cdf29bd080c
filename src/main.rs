use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use parcel_track::config::{LoggingSettings, Settings};
use parcel_track::routes::{self, AppState};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Parcel Track proxy...");

    if settings.upstream.api_key.is_empty() {
        warn!("No TrackMage API key configured, upstream calls will be rejected");
    }

    // One HTTP client for the whole process; per-call timeouts are set per request
    let client = reqwest::Client::builder()
        .build()
        .map_err(|e| {
            error!("Failed to create HTTP client: {}", e);
            std::io::Error::new(std::io::ErrorKind::Other, e)
        })?;

    let app_state = AppState::new(&settings, client);

    info!(
        "Tracker initialized with carriers {:?} (timeout: {}ms)",
        settings.tracking.carriers, settings.upstream.timeout_ms
    );

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);
    info!("Example endpoint: http://localhost:{}/track?number=ENE083992448MY", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"]);

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
