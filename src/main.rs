//! Conscious Evolution HTTP server.

use std::sync::Arc;

use http::{HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use conscious_evolution::adapters::email::{EmailJsConfig, EmailJsMailer};
use conscious_evolution::adapters::http::assessment::{assessment_router, AssessmentAppState};
use conscious_evolution::adapters::memory::{InMemoryAssessmentStore, StoreLimits};
use conscious_evolution::config::{AppConfig, ConfigError, ServerConfig};
use conscious_evolution::domain::survey::SurveyCatalog;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    init_tracing(&config);

    let catalog = SurveyCatalog::load(config.survey.content_path()).map_err(ConfigError::from)?;
    info!(
        dimensions = catalog.dimensions().len(),
        questions = catalog.total_questions(),
        "Survey content loaded"
    );

    let store = InMemoryAssessmentStore::with_limits(StoreLimits {
        idle_ttl: config.store.idle_ttl(),
        max_forms: config.store.max_forms,
    });
    let sweeper = store.spawn_sweeper(config.store.sweep_interval());

    let mailer = EmailJsMailer::new(EmailJsConfig::from_settings(&config.email));
    let state = AssessmentAppState {
        store: Arc::new(store),
        mailer: Arc::new(mailer),
        catalog: Arc::new(catalog),
        copy_to: config.email.copy_to.clone(),
    };

    let app = assessment_router()
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.server))
                .layer(TimeoutLayer::new(config.server.request_timeout())),
        );

    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT])
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
