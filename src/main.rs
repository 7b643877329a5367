//! exo-vault: resource vault with a lead-capture gate
//!
//! Serves the vault page, records leads through a Convex deployment and
//! remembers unlocked visitors with a cookie.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exo_vault::config::Config;
use exo_vault::leads::{ConvexBackend, InMemoryBackend, LeadAdapter, LeadBackend};
use exo_vault::server::{create_router, AppState};

#[derive(Parser)]
#[command(name = "exo-vault")]
#[command(about = "Tiered resource vault with a lead-capture gate")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "EXO_VAULT_CONFIG", default_value = "exo-vault.toml")]
    config: PathBuf,

    /// HTTP port (overrides config file)
    #[arg(short, long, env = "EXO_VAULT_PORT")]
    port: Option<u16>,

    /// Convex deployment URL (overrides config file)
    #[arg(long, env = "CONVEX_URL")]
    convex_url: Option<String>,

    /// Static asset directory (overrides config file)
    #[arg(long, env = "EXO_VAULT_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("exo_vault={},tower_http=info", cli.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting exo-vault");
    info!("Config file: {}", cli.config.display());

    let mut config = Config::load(&cli.config)?;

    // Apply CLI overrides
    if let Some(port) = cli.port {
        config.server.http_port = port;
    }
    if let Some(url) = cli.convex_url.filter(|url| !url.trim().is_empty()) {
        config.backend.deployment_url = Some(url);
    }
    if let Some(dir) = cli.static_dir {
        config.server.static_dir = dir;
    }

    let backend: Arc<dyn LeadBackend> = match &config.backend.deployment_url {
        Some(url) => {
            info!(url = %url, mutation = %config.backend.mutation, "Using Convex lead backend");
            Arc::new(ConvexBackend::new(
                url.clone(),
                config.backend.mutation.clone(),
                config.backend.timeout(),
            )?)
        }
        None => {
            warn!("No Convex deployment configured, leads are kept in memory");
            Arc::new(InMemoryBackend::new())
        }
    };
    let adapter = LeadAdapter::new(backend).with_source(config.backend.source.clone());

    info!("Static dir: {}", config.server.static_dir.display());

    let addr = config.listen_addr();
    let app = create_router(Arc::new(AppState::new(config, adapter)));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Vault listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
