use sqlx::postgres::{PgPool, PgPoolOptions};
use std::env;

use strategos_types::errors::DbError;

pub type DbPool = PgPool;

const MAX_CONNECTIONS: u32 = 5;

pub async fn establish_connection_pool(database_url: &str) -> Result<DbPool, DbError> {
    Ok(PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await?)
}

/// Connects to `TEST_DATABASE_URL`. Returns `None` when it is not set, so
/// database tests can be skipped on machines without Postgres.
pub async fn establish_test_connection_pool() -> Result<Option<DbPool>, DbError> {
    dotenvy::dotenv().ok();

    match env::var("TEST_DATABASE_URL") {
        Ok(url) if !url.trim().is_empty() => {
            let pool = establish_connection_pool(&url).await?;
            run_migrations(&pool).await?;
            Ok(Some(pool))
        }
        _ => Ok(None),
    }
}

pub async fn run_migrations(pool: &DbPool) -> Result<(), DbError> {
    sqlx::migrate!("../migrations").run(pool).await?;
    Ok(())
}
