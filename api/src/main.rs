use std::sync::Arc;

use actix_web::{App, HttpServer};
use tracing_actix_web::TracingLogger;

use rexh_api::{routes, telemetry, ExceptionHandler};
use rexh_core::domain::DefaultPolicy;
use rexh_core::services::ResponseNormalizer;
use rexh_infra::{build_translation_store, DatasourceRegistry};
use rexh_shared::{AppConfig, Locale};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    telemetry::init_tracing(&config.logging());

    tracing::info!(
        environment = %config.environment,
        application = %config.server.application_name,
        "Starting REXH API server"
    );

    // Any failure below aborts startup; the server never runs without a translation store
    let policy = DefaultPolicy::from_config(&config.exception_handler)?;
    let registry = DatasourceRegistry::from_config(&config.datasources).await?;
    let store = build_translation_store(&config.exception_handler, &registry).await?;

    let normalizer = Arc::new(ResponseNormalizer::new(
        store,
        policy,
        config.server.application_name.clone(),
    ));
    let fallback_locale = Locale::new(&config.exception_handler.fallback_locale);

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(ExceptionHandler::new(
                Arc::clone(&normalizer),
                fallback_locale.clone(),
            ))
            .wrap(TracingLogger::default())
            .configure(routes::configure)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(&bind_address)?.run().await?;

    registry.close_all().await;
    Ok(())
}
