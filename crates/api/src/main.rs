use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use timetable_api::config::ServerConfig;
use timetable_api::router::build_app_router;
use timetable_api::state::AppState;
use timetable_api::ws::{start_heartbeat, WsManager};
use timetable_db::DbPool;

const DEFAULT_LOG_FILTER: &str = "timetable_api=debug,timetable_db=info,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();
    init_tracing(config.json_logs);
    tracing::info!(
        host = %config.host,
        port = config.port,
        origins = ?config.cors_origins,
        "Timetable API starting"
    );

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = prepare_database(&database_url).await;

    let ws_manager = Arc::new(WsManager::new());
    let heartbeat = start_heartbeat(
        Arc::clone(&ws_manager),
        Duration::from_secs(config.ws_heartbeat_secs),
    );

    let state = AppState::new(pool, config.clone(), Arc::clone(&ws_manager));
    let app = build_app_router(state, &config);

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind {addr}: {e}"));
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // Subscribers get a Close frame so they reconnect elsewhere.
    let subscribers = ws_manager.connection_count().await;
    let deadline = Duration::from_secs(config.shutdown_timeout_secs);
    if tokio::time::timeout(deadline, ws_manager.shutdown_all())
        .await
        .is_err()
    {
        tracing::warn!(subscribers, "Timed out closing WebSocket subscribers");
    }
    heartbeat.abort();

    tracing::info!(subscribers, "Timetable API stopped");
}

/// `RUST_LOG` wins over [`DEFAULT_LOG_FILTER`]; `LOG_FORMAT=json` switches
/// to one JSON object per line.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Connect, verify and migrate. Any failure aborts startup.
async fn prepare_database(url: &str) -> DbPool {
    let pool = timetable_db::create_pool(url)
        .await
        .expect("Failed to connect to database");
    timetable_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    timetable_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready");
    pool
}

/// Resolve on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        let mut terminate =
            signal(SignalKind::terminate()).expect("Failed to install SIGTERM handler");
        tokio::select! {
            res = tokio::signal::ctrl_c() => {
                res.expect("Failed to install Ctrl-C handler");
                tracing::info!("SIGINT received, draining");
            }
            _ = terminate.recv() => tracing::info!("SIGTERM received, draining"),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
        tracing::info!("Ctrl-C received, draining");
    }
}
