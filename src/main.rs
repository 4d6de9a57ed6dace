use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use fromager::config::{Settings, StoreBackend};
use fromager::core::Recommender;
use fromager::routes::{self, AppState};
use fromager::services::{seed_if_empty, CatalogCache, CatalogStore, InMemoryCatalog, PostgresCatalog};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(default_level: &str, default_format: &str) {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| default_level.to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| default_format.to_string());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

async fn build_store(settings: &Settings) -> std::io::Result<Arc<dyn CatalogStore>> {
    match settings.database.backend {
        StoreBackend::Memory => {
            info!("Using in-memory catalog store");
            Ok(Arc::new(InMemoryCatalog::new()))
        }
        StoreBackend::Postgres => {
            let db = &settings.database;
            let store = PostgresCatalog::from_settings(
                &db.url,
                db.max_connections,
                db.min_connections,
                db.acquire_timeout_secs,
                db.idle_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e)
            })?;

            info!(
                "PostgreSQL catalog store initialized (max: {} connections)",
                db.max_connections.unwrap_or(10)
            );
            Ok(Arc::new(store))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration before logging so its level can serve as the default
    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging.level, &logging.format);

    let settings = settings.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    info!("Starting Fromager recommendation service...");

    let catalog = build_store(&settings).await?;

    if settings.catalog.seed_on_empty {
        if let Some(path) = settings.catalog.seed_path.as_ref() {
            match seed_if_empty(catalog.as_ref(), path).await {
                Ok(0) => {}
                Ok(seeded) => info!("Seeded {} cheeses from {}", seeded, path.display()),
                Err(e) => warn!("Seeding from {} failed: {}", path.display(), e),
            }
        }
    }

    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let cache_capacity = settings.cache.capacity.unwrap_or(16);
    let cache = Arc::new(CatalogCache::new(cache_capacity, cache_ttl));

    info!("Catalog cache initialized (capacity: {}, TTL: {}s)", cache_capacity, cache_ttl);

    let weights = settings.scoring_weights();
    let recommender = Recommender::new(weights);

    info!("Recommender initialized with weights: {:?}", weights);

    let app_state = AppState {
        catalog,
        cache,
        recommender,
        limits: settings.recommendations.clone(),
        seed_path: settings.catalog.seed_path.clone(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
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
