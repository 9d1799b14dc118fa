use clap::Parser;
use revenue_meter::config::AppConfig;
use revenue_meter::error::AppError;
use revenue_meter::providers::revenuecat::RevenueCatClient;
use revenue_meter::providers::stripe::StripeClient;
use revenue_meter::routes::{build_router, AppState};
use revenue_meter::service::RevenueService;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "revenue-meter")]
#[command(about = "Human-readable revenue summaries over Stripe and RevenueCat")]
struct Cli {
    /// Override the configured listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Override the configured listen host.
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cli = Cli::parse();
    let mut cfg = AppConfig::load()?;
    if let Some(port) = cli.port {
        cfg.server.port = port;
    }
    if let Some(host) = cli.host {
        cfg.server.host = host;
    }

    let client = reqwest::Client::new();
    let service = RevenueService::new(
        Arc::new(StripeClient::new(client.clone(), &cfg.stripe)),
        Arc::new(RevenueCatClient::new(client, &cfg.revenuecat)),
    );
    let app = build_router(AppState::new(service));

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| AppError::Config(format!("invalid listen address: {e}")))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "revenue-meter listening");

    axum::serve(listener, app).await?;

    Ok(())
}
