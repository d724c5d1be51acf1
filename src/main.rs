//! Labkeeper Server - Computer Lab Inventory
//!
//! REST API for labs, their PCs and equipment, with bulk spreadsheet import.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use labkeeper_server::{
    api,
    config::{AppConfig, LoggingConfig},
    repository::Repository,
    services::Services,
    AppState,
};

/// Multipart framing on top of the file itself
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    init_tracing(&config.logging);

    tracing::info!("Starting Labkeeper Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    let addr = SocketAddr::new(
        config.server.host.parse().expect("Invalid host address"),
        config.server.port,
    );

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository);

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    let app = create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Pretty or JSON output, filtered by `RUST_LOG` or the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("labkeeper_server={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let upload_limit = state.config.import.max_upload_bytes() + FORM_OVERHEAD_BYTES;

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Bulk import
        .route(
            "/labs/import",
            post(api::imports::import_file).layer(DefaultBodyLimit::max(upload_limit)),
        )
        // Labs
        .route("/labs", get(api::labs::list_labs).post(api::labs::create_lab))
        .route(
            "/labs/:id",
            get(api::labs::get_lab)
                .put(api::labs::update_lab)
                .delete(api::labs::delete_lab),
        )
        .route("/labs/:id/pcs", get(api::labs::list_lab_pcs))
        .route("/labs/:id/lab-equipment", get(api::labs::list_lab_equipment))
        // PCs
        .route("/pcs", get(api::pcs::list_pcs).post(api::pcs::create_pc))
        .route(
            "/pcs/:id",
            get(api::pcs::get_pc)
                .put(api::pcs::update_pc)
                .delete(api::pcs::delete_pc),
        )
        .route("/pcs/:id/peripherals", get(api::pcs::list_pc_peripherals))
        // Peripherals
        .route(
            "/peripherals",
            get(api::peripherals::list_peripherals).post(api::peripherals::create_peripheral),
        )
        .route(
            "/peripherals/:id",
            get(api::peripherals::get_peripheral)
                .put(api::peripherals::update_peripheral)
                .delete(api::peripherals::delete_peripheral),
        )
        // Software
        .route(
            "/software",
            get(api::software::list_software).post(api::software::create_software),
        )
        .route(
            "/software/:id",
            get(api::software::get_software)
                .put(api::software::update_software)
                .delete(api::software::delete_software),
        )
        // Per-PC CPU and operating system
        .route("/cpu", get(api::cpus::list_cpus).post(api::cpus::create_cpu))
        .route(
            "/cpu/:id",
            get(api::cpus::get_cpu)
                .put(api::cpus::update_cpu)
                .delete(api::cpus::delete_cpu),
        )
        .route(
            "/os",
            get(api::operating_systems::list_operating_systems)
                .post(api::operating_systems::create_operating_system),
        )
        .route(
            "/os/:id",
            get(api::operating_systems::get_operating_system)
                .put(api::operating_systems::update_operating_system)
                .delete(api::operating_systems::delete_operating_system),
        )
        // Lab equipment
        .route(
            "/lab-equipment",
            get(api::lab_equipment::list_equipment).post(api::lab_equipment::create_equipment),
        )
        .route(
            "/lab-equipment/:id",
            get(api::lab_equipment::get_equipment)
                .put(api::lab_equipment::update_equipment)
                .delete(api::lab_equipment::delete_equipment),
        )
        .route(
            "/lab-equipment/:id/details",
            get(api::lab_equipment::get_details).put(api::lab_equipment::put_detail),
        )
        // Maintenance
        .route(
            "/maintenance",
            get(api::maintenance::list_logs).post(api::maintenance::create_log),
        )
        .route(
            "/maintenance/:id",
            get(api::maintenance::get_log)
                .put(api::maintenance::update_log)
                .delete(api::maintenance::delete_log),
        )
        .route("/maintenance/:id/fix", post(api::maintenance::fix_log))
        // Inventory
        .route("/inventory", get(api::inventory::get_inventory))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}
