//! Chain Network Registry API - Main Entry Point

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::GovernorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chain_network_registry::domain::gateways::NetworkRepository;
use chain_network_registry::infrastructure::driven_adapters::config::AppConfig;
use chain_network_registry::infrastructure::driven_adapters::network_repository::InMemoryNetworkRepository;
use chain_network_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; LOG_FORMAT=json switches to structured output
    let json_logs = std::env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chain_network_registry=debug,tower_http=debug".into()),
        )
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);
    tracing::info!("Configuration loaded successfully");

    // Bootstrap the registry with livenet and testnet
    let (network_repository, builtin) = InMemoryNetworkRepository::bootstrap();
    if config.registry.regtest {
        network_repository.set_regtest(true);
    }
    tracing::info!(
        livenet_port = ?builtin.livenet.port(),
        testnet_port = ?builtin.testnet.port(),
        regtest = config.registry.regtest,
        "Network registry ready"
    );

    let state = AppState::new(Arc::clone(&config), Arc::new(network_repository));

    // Per-IP rate limiting
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.rate_limit.requests_per_second)
            .burst_size(config.rate_limit.burst_size)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("rate_limit values must be greater than zero"))?,
    );
    let governor_limiter = governor_config.limiter().clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            interval.tick().await;
            governor_limiter.retain_recent();
        }
    });

    let app = api_rest::router(state).layer(GovernorLayer {
        config: governor_config,
    });

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
