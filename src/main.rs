use actix_cors::Cors;
use actix_web::{web, App, HttpServer, HttpResponse, middleware, error, http::StatusCode};
use healthshare_match::config::{LoggingSettings, Settings};
use healthshare_match::routes::{self, AppState};
use healthshare_match::services::{CacheManager, CatalogStore};
use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .json(self)
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &actix_web::HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    JsonError {
        error: "invalid_query".to_string(),
        message: format!("Invalid query: {}", err),
        status_code: 400,
    }
    .into()
}

/// Initialize logging; `LOG_LEVEL`/`LOG_FORMAT` override the config file
fn init_logging(settings: &LoggingSettings) {
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.level.clone());
    let format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.format.clone());

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

/// Reload the catalog on SIGHUP and drop cached responses built from the old one
#[cfg(unix)]
fn spawn_reload_handler(catalog: Arc<CatalogStore>, cache: Option<Arc<CacheManager>>) {
    use tokio::signal::unix::{signal, SignalKind};

    actix_web::rt::spawn(async move {
        let mut sighup = match signal(SignalKind::hangup()) {
            Ok(sighup) => sighup,
            Err(e) => {
                error!("Failed to install SIGHUP handler, catalog reload disabled: {}", e);
                return;
            }
        };

        while sighup.recv().await.is_some() {
            info!("SIGHUP received, reloading plan catalog");
            match catalog.reload() {
                Ok(_) => {
                    if let Some(cache) = &cache {
                        cache.invalidate_all();
                    }
                }
                Err(e) => error!("Catalog reload failed, keeping previous catalog: {}", e),
            }
        }
    });
}

#[cfg(not(unix))]
fn spawn_reload_handler(_catalog: Arc<CatalogStore>, _cache: Option<Arc<CacheManager>>) {}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    init_logging(
        &settings
            .as_ref()
            .map(|s| s.logging.clone())
            .unwrap_or_default(),
    );

    info!("Starting healthshare plan matching service...");

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!("Configuration loaded successfully");

    let catalog = Arc::new(CatalogStore::load(&settings.catalog.path).map_err(|e| {
        error!("Failed to load plan catalog from {}: {}", settings.catalog.path, e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?);

    let cache = if settings.cache.enabled {
        info!(
            "Response cache enabled ({} entries, TTL: {}s)",
            settings.cache.capacity, settings.cache.ttl_secs
        );
        Some(Arc::new(CacheManager::new(settings.cache.capacity, settings.cache.ttl_secs)))
    } else {
        info!("Response cache disabled");
        None
    };

    spawn_reload_handler(catalog.clone(), cache.clone());

    let app_state = AppState {
        catalog,
        cache,
        limits: settings.recommendations.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
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
