use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hemotrack::config::Config;
use hemotrack::modules::bags::repositories::MySqlBloodBagRepository;
use hemotrack::modules::donors::repositories::MySqlDonorRepository;
use hemotrack::modules::health::controllers::health_controller;
use hemotrack::modules::reports::controllers::report_controller;
use hemotrack::modules::reports::services::ReportService;
use hemotrack::modules::requests::repositories::MySqlRequestRepository;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    // Initialize tracing; RUST_LOG overrides the configured level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.app.filter_directives().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Hemotrack Blood-Bank Reporting Service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .expect("Failed to create database pool");

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    // Read-only snapshot collaborators behind the report service
    let report_service = ReportService::new(
        Arc::new(MySqlDonorRepository::new(db_pool.clone())),
        Arc::new(MySqlRequestRepository::new(db_pool.clone())),
        Arc::new(MySqlBloodBagRepository::new(db_pool.clone())),
    );
    let report_service = web::Data::new(report_service);

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(db_pool.clone()))
            .app_data(report_service.clone())
            .configure(health_controller::configure)
            .configure(report_controller::configure)
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}
