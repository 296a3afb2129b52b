mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod resume;
mod routes;
mod state;
mod users;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::{Deadline, GeminiClient, Generator};
use crate::resume::SectionService;
use crate::routes::build_router;
use crate::state::AppState;
use crate::users::{PgUserRepository, UserService};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumero API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize the generator backend once; the section service only sees the trait
    let gemini = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_model.clone())
        .context("Failed to build Gemini client")?;
    info!("Generator initialized (model: {})", gemini.model());

    let generator: Arc<dyn Generator> = match config.generation_timeout {
        Some(limit) => {
            info!("Generation deadline: {}s", limit.as_secs());
            Arc::new(Deadline::new(gemini, limit))
        }
        None => Arc::new(gemini),
    };

    let state = AppState {
        sections: SectionService::new(generator),
        users: UserService::new(Arc::new(PgUserRepository::new(db))),
        config: config.clone(),
    };

    if config.cors_enabled {
        info!("CORS: permissive");
    }
    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
