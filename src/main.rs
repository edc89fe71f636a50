use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use city_news_relay::config::{LoggingSettings, Settings};
use city_news_relay::routes::{self, AppState};
use city_news_relay::services::NewsApiClient;
use std::io;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "text" => subscriber.init(),
        _ => subscriber.json().init(),
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(io::Error::new(io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    init_logging(&settings.logging);

    info!("Starting City News Relay...");

    // Initialize NewsAPI client
    let timeout = settings.news_api.request_timeout();
    let news_api = NewsApiClient::new(
        settings.news_api.base_url,
        settings.news_api.api_key,
        settings.news_api.language,
        timeout,
    )
    .map_err(|e| {
        error!("Failed to create NewsAPI client: {}", e);
        io::Error::new(io::ErrorKind::Other, e.to_string())
    })?;

    info!("NewsAPI client initialized (timeout: {:?})", timeout);

    // Build application state
    let app_state = AppState {
        news_api: Arc::new(news_api),
        relay: settings.relay,
    };

    info!(
        "Relevance filter {}, page size {}",
        if app_state.relay.enable_relevance_filter { "enabled" } else { "disabled" },
        app_state.relay.page_size
    );

    // Configure HTTP server
    let host = settings.server.host;
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

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
