use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wedding_site::{AppState, Config, create_router, sync};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Configuration and wedding document
    let config = Config::from_env()?;
    config.print_info();
    let site = config.load_wedding_config()?;
    info!("Wedding config loaded for {}", site.couple.couple_name_display);

    let addr = format!("{}:{}", config.server_host, config.server_port);
    let state = Arc::new(AppState::new(config, site)?);

    // Initial guest list, then keep it in step with update broadcasts
    sync::refresh_guest_list(&state).await;
    sync::start_refresh_listener(state.clone());

    let app = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
