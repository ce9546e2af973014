use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{error, info};

use gate_api::{router::build_router, state::AppState};
use gate_core::domain::RoutePolicy;
use gate_core::resolvers::SessionResolver;
use gate_core::services::GateService;
use gate_infrastructure::HttpSessionResolver;
use gate_security::{SessionTokenService, TokenSessionResolver};
use gate_shared::config::AppConfig;
use gate_shared::constants;
use gate_shared::error::AppError;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    gate_shared::telemetry::init_telemetry();

    info!("Portal gate server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Session resolution collaborator
    let resolver = build_resolver(&config)?;

    // Gate service with configured redirect targets
    let policy = RoutePolicy {
        home: config.routes.home.clone(),
        login: config.routes.login.clone(),
        unauthorized: config.routes.unauthorized.clone(),
        subscribe: config.routes.subscribe.clone(),
    };
    let gate = Arc::new(GateService::new(resolver, policy));

    let state = AppState {
        gate,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)));

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_resolver(config: &AppConfig) -> Result<Arc<dyn SessionResolver>> {
    match config.provider.mode.as_str() {
        "token" => {
            info!("Session resolution: local token verification");
            let tokens = SessionTokenService::new(
                config.provider.jwt_secret.clone(),
                constants::DEFAULT_SESSION_TTL_SECS,
            );
            Ok(Arc::new(TokenSessionResolver::new(tokens)))
        }
        "remote" => {
            info!(
                "Session resolution: remote verify at {}",
                config.provider.base_url
            );
            let resolver = HttpSessionResolver::new(
                &config.provider.base_url,
                &config.provider.verify_path,
                config.provider.timeout_seconds,
            )?;
            Ok(Arc::new(resolver))
        }
        other => Err(AppError::InvalidProviderMode(other.to_string()).into()),
    }
}
