mod app;
mod clock;
mod config;
mod dates;
mod db;
mod entries;
mod error;
mod memory;
mod profiles;
mod state;
mod summary;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "caltrack=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    tracing::info!(
        storage = ?config.storage,
        utc_offset = %config.utc_offset,
        "configuration loaded"
    );

    let state = AppState::init(&config).await?;
    app::serve(app::build_app(state), &config.bind_addr()).await
}
