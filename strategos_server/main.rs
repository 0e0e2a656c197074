use std::sync::Arc;

use strategos_app::{
    app_bus::AppBus, config::Config, memory::InMemoryUnitOfWorkProvider, uow::UnitOfWorkProvider,
};
use strategos_db::{establish_connection_pool, run_migrations, uow::PostgresUnitOfWorkProvider};
use strategos_types::{Result, errors::ApplicationError};
use strategos_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let config = Arc::new(Config::from_env());
    let _log_guard = setup_logging(&config.logging);

    let app_bus = setup_app(config.clone()).await?;
    let state = AppState::new(app_bus);

    WebRouter::serve(state, config.port).await
}

async fn setup_app(config: Arc<Config>) -> Result<Arc<AppBus>, ApplicationError> {
    let uow_provider = setup_history_store(&config).await?;
    Ok(Arc::new(AppBus::new(config, uow_provider)))
}

async fn setup_history_store(
    config: &Config,
) -> Result<Arc<dyn UnitOfWorkProvider>, ApplicationError> {
    match &config.database_url {
        Some(url) => {
            let db_pool = establish_connection_pool(url).await?;
            run_migrations(&db_pool).await?;
            tracing::info!("Battle history stored in PostgreSQL.");
            Ok(Arc::new(PostgresUnitOfWorkProvider::new(db_pool)))
        }
        None => {
            tracing::info!("DATABASE_URL not set, battle history kept in memory.");
            Ok(Arc::new(InMemoryUnitOfWorkProvider::new()))
        }
    }
}
