use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use procurement_backend::catalog::SampleCatalog;
use procurement_backend::config::UploadConfig;
use procurement_backend::services::file_service::FileService;
use procurement_backend::services::identity::HeaderIdentity;
use procurement_backend::services::ingest::IngestService;
use procurement_backend::services::storage::{LocalStorage, Storage};
use procurement_backend::{AppState, create_app};
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing with EnvFilter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "procurement_backend=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚀 Starting Procurement Backend...");

    let config = UploadConfig::from_env();
    info!(
        "📦 Upload Config: dir={}, max file size={}MB",
        config.upload_dir.display(),
        config.max_file_size / 1024 / 1024
    );

    // Bootstrap the storage root before accepting traffic.
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let storage: Arc<dyn Storage> = Arc::new(LocalStorage::new(&config.upload_dir));
    let state = AppState {
        identity: Arc::new(HeaderIdentity),
        ingest: Arc::new(IngestService::new(
            Arc::clone(&storage),
            config.max_file_size,
        )),
        files: Arc::new(FileService::new(storage)),
        catalog: Arc::new(SampleCatalog::seed()),
        config,
    };

    let app = create_app(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown");
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            })
            .on_request(|request: &axum::http::Request<_>, _span: &tracing::Span| {
                info!("📥 {} {}", request.method(), request.uri());
            })
            .on_response(
                |response: &axum::http::Response<_>,
                 latency: std::time::Duration,
                 _span: &tracing::Span| {
                    info!(
                        "📤 Finished in {:?} with status {}",
                        latency,
                        response.status()
                    );
                },
            ),
    );

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("✅ Server ready at http://{}", addr);
    info!("📖 Swagger UI: http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("🛑 Server shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("⌨️  Ctrl+C received, starting graceful shutdown...");
        },
        _ = terminate => {
            info!("💤 SIGTERM received, starting graceful shutdown...");
        },
    }
}
