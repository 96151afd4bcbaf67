use platen::{FoPassthrough, RenderDelegate};
use platen_service::{build_router, config::Config, state::AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::load()?;

    // The real rasterizer lives behind the RenderDelegate seam; until one is
    // wired up the service serves the compiled document text itself.
    let delegate: Arc<dyn RenderDelegate> = Arc::new(FoPassthrough);
    let state = AppState::new(delegate);

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("platen service listening on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - POST /render");
    tracing::info!("  - GET  /health");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,platen_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
