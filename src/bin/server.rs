//! Server: reads configuration from the environment, connects the store, mounts common and
//! table routes, serves until SIGINT, SIGTERM or SIGUSR1.

use axum::extract::DefaultBodyLimit;
use axum::Router;
use table_crud::{app, AppState, MemoryStore, PgStore, RecordStore, ServerConfig, StoreKind};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("table_crud=info".parse()?))
        .init();

    let config = ServerConfig::from_env()?;

    let router = match config.store {
        StoreKind::Postgres => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            let store = match &config.schema {
                Some(schema) => PgStore::new(pool).with_schema(schema.clone()),
                None => PgStore::new(pool),
            };
            build(store, &config)
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            build(MemoryStore::new(), &config)
        }
    };

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        schemas = ?config.schemas,
        read_only = config.read_only,
        "listening"
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("shut down");
    Ok(())
}

fn build<S: RecordStore>(store: S, config: &ServerConfig) -> Router {
    let state = AppState::new(store, config.policy());
    app(state, &config.schemas).layer(
        ServiceBuilder::new()
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(config.body_limit)),
    )
}

async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let wait = |kind: SignalKind| async move {
        match signal(kind) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };
    tokio::select! {
        _ = wait(SignalKind::interrupt()) => {},
        _ = wait(SignalKind::terminate()) => {},
        _ = wait(SignalKind::user_defined1()) => {},
    }
    tracing::info!("shutdown signal received");
}
