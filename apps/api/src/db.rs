use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const CREATE_USERS_SQL: &str = include_str!("../migrations/0001_create_users.sql");

/// Creates a PostgreSQL pool and makes sure the `users` table exists.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    sqlx::query(CREATE_USERS_SQL)
        .execute(&pool)
        .await
        .context("Failed to apply users schema")?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}
