mod api_doc;
mod cache;
mod db;
mod notification;
mod realtime;
mod routes;
mod thumbnail;
mod upload;
mod websocket;

use axum::{routing::get, Router};
use dotenv::dotenv;
use sqlx::postgres::PgPoolOptions;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::cache::query::QueryCache;
use crate::notification::service::NotificationService;
use crate::notification::store::PgNotificationStore;
use crate::realtime::sync::RealtimeSync;
use crate::upload::disk::DiskUploader;
use crate::upload::service::Uploader;

#[derive(Debug, Clone)]
struct AppConfig {
    database_url: String,
    redis_url: Option<String>,
    upload_dir: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    tracing_subscriber::fmt::init();

    // Load .env file if it exists
    dotenv().ok();

    let config = AppConfig {
        database_url: std::env::var("DATABASE_URL")?,
        redis_url: std::env::var("REDIS_URL").ok(),
        upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
    };

    // Create connection pool
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    // Check if the database is initialized
    if !db::check_db_initialized(&pool).await {
        db::init_db(&pool).await?;
    }

    let cache = Arc::new(QueryCache::new());
    let store = Arc::new(PgNotificationStore::new(pool.clone()));
    let notification_service = NotificationService::new(store, cache.clone());

    // The guard owns the change-feed subscription for the lifetime of the
    // process; dropping it on shutdown tears the subscription down.
    let _realtime = match &config.redis_url {
        Some(url) => {
            info!("Activating realtime sync with Redis URL: {}", url);
            match redis::Client::open(url.clone()) {
                Ok(client) => Some(RealtimeSync::activate(client, cache.clone())),
                Err(e) => {
                    error!("Failed to connect to Redis: {}", e);
                    None
                }
            }
        }
        None => {
            info!("No Redis URL configured, realtime sync disabled");
            None
        }
    };

    let uploader: Arc<dyn Uploader> = Arc::new(DiskUploader::new(&config.upload_dir));

    // Build the router
    let app = Router::new()
        // API documentation
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Health routes
        .merge(routes::health::routes(pool.clone()))
        // Notification routes (REST + WebSocket observer)
        .merge(routes::notifications::routes(notification_service.clone()))
        // Thumbnail routes
        .merge(routes::thumbnails::routes())
        // Upload routes
        .merge(routes::upload::routes(uploader))
        // Add welcome route
        .route("/", get(|| async { "Welcome to Media Notify Backend API" }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    // Try different ports
    let mut port = 9500;
    let max_tries = 5;
    for attempt in 1..=max_tries {
        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        match axum::Server::try_bind(&addr) {
            Ok(server) => {
                println!(
                    "🚀 Server started successfully at http://localhost:{}",
                    port
                );
                println!("📄 API Documentation: http://localhost:{}/docs", port);
                println!(
                    "🔌 WebSocket Notifications API: ws://localhost:{}/api/notifications/ws",
                    port
                );
                return server
                    .serve(app.into_make_service())
                    .await
                    .map_err(|e| e.into());
            }
            Err(_) => {
                if attempt == max_tries {
                    return Err("Failed to bind to any port".into());
                }
                port += 1;
            }
        }
    }

    Err("Failed to bind to any port".into())
}
