use contact_messages::{routes, AppState, Config, SqliteStore};
use dotenv::dotenv;
use mimalloc::MiMalloc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = Config::from_env();
    init_tracing(&cfg);

    info!(version = env!("CARGO_PKG_VERSION"), "contact_messages starting");

    let store = SqliteStore::connect(&cfg.database_url, cfg.max_connections).await?;
    info!(database_url = %cfg.database_url, max_connections = cfg.max_connections, "database ready");

    let listener = tokio::net::TcpListener::bind(cfg.listen_target()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "server listening");

    let app = routes::build(AppState::new(cfg, store));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("contact_messages stopped");
    Ok(())
}

fn init_tracing(cfg: &Config) {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(&cfg.log_level).unwrap_or_else(|e| {
            eprintln!(
                "WARN: CONTACT_LOG='{}' is not a valid tracing filter ({e}); falling back to 'info'",
                cfg.log_level
            );
            EnvFilter::new("info")
        }),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true);

    if cfg.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Resolves on SIGINT, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install CTRL+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => warn!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("shutdown signal received");
}
