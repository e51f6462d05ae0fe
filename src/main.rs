use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

use rusty_jokes::api::axum::{app_routes, AppState};
use rusty_jokes::config::AppConfig;
use rusty_jokes::session::SessionManager;
use rusty_jokes::sqlite::{create_repositories, migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Init logging
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    migrations::run(&pool).await?;

    let (user_repo, joke_repo) = create_repositories(pool);
    let sessions = Arc::new(SessionManager::new(config.session)?);

    let state = AppState {
        user_repo,
        joke_repo,
        sessions,
    };
    let app = app_routes().with_state(state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    log::info!(target: "rusty_jokes", "msg=\"listening\", addr=\"{}\"", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
