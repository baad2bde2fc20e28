/// Catalog Server - Album catalog REST service
use catalog_core::AlbumStorage;
use catalog_server::{config::ServerConfig, state::AppState};
use catalog_storage::SqliteAlbumStorage;
use clap::Parser;
use std::{future::IntoFuture, net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Grace period given to in-flight requests on shutdown.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(about = "Album catalog REST service", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    serve(cli.config.as_deref()).await
}

async fn serve(config_path: Option<&std::path::Path>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    tracing::info!("Starting catalog server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = catalog_storage::create_pool(&config.storage.database_url).await?;
    catalog_storage::run_migrations(&pool).await?;

    let storage: Arc<dyn AlbumStorage> = Arc::new(SqliteAlbumStorage::new(pool));
    tracing::info!("Database connected");

    // Build application state and router
    let app_state = AppState::new(storage);
    let app = catalog_server::router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Serve until interrupted, then drain in-flight requests for a bounded
    // grace period before forcing exit.
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let mut server = tokio::spawn(
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .into_future(),
    );

    tokio::select! {
        result = &mut server => {
            result??;
            return Ok(());
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    let _ = shutdown_tx.send(());
    match tokio::time::timeout(SHUTDOWN_GRACE, &mut server).await {
        Ok(result) => result??,
        Err(_) => {
            tracing::warn!("Graceful shutdown timed out, aborting");
            server.abort();
        }
    }

    Ok(())
}
