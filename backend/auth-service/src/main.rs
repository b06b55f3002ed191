/// Marketplace Auth Service - Main entry point
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

use marketplace_auth::{
    config::Config,
    db::PgAuthRepository,
    metrics,
    middleware::GatewayAuthMiddleware,
    routes,
    services::{AuthService, KafkaMessagePublisher, MessagePublisher, S3MediaUploader},
    telemetry, AppState,
};
use s3_utils::S3Client;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    telemetry::init_tracing();

    let config = Config::from_env().context("Failed to load configuration from environment")?;

    tracing::info!("Starting Marketplace Auth Service on {}", config.bind_address());

    let db_pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!("Database connection pool initialized");

    let signer = Arc::new(config.token_signer()?);

    let publisher: Arc<dyn MessagePublisher> = Arc::new(KafkaMessagePublisher::new(
        &config.kafka_brokers,
        config.topic_prefix(),
    )?);

    tracing::info!(brokers = %config.kafka_brokers, "Kafka publisher initialized");

    let s3_client = S3Client::with_config(config.s3_config()).await;
    let media_uploader = Arc::new(S3MediaUploader::new(Arc::new(s3_client.operations())));

    let gateway_signer = config.gateway_signer().map(Arc::new);
    if gateway_signer.is_none() {
        tracing::warn!("GATEWAY_JWT_TOKEN not set; gateway request verification disabled");
    }
    let gateway = GatewayAuthMiddleware::new(gateway_signer);

    let auth_service = Arc::new(AuthService::new(
        Arc::new(PgAuthRepository::new(db_pool)),
        publisher.clone(),
        signer,
    ));

    let state = web::Data::new(AppState {
        auth_service,
        media_uploader,
        publisher,
        client_url: config.client_url.clone(),
    });

    metrics::initialize_auth_metrics();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(routes::configure(gateway.clone()))
    })
    .bind(config.bind_address())?
    .run()
    .await?;

    tracing::info!("Auth service shut down");
    Ok(())
}
