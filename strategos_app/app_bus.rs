use std::sync::Arc;

use strategos_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Command, CommandHandler, ComputeHandler, Query, QueryHandler},
    uow::UnitOfWorkProvider,
};

/// AppBus (Mediator)
/// This struct is the central entry point for all application logic.
/// It does not contain any business logic itself.
/// Its primary roles are:
/// 1. Managing Unit of Work (transaction) lifecycles.
/// 2. Dispatching Commands and Queries to their respective handlers.
#[derive(Clone)]
pub struct AppBus {
    config: Arc<Config>,
    uow_provider: Arc<dyn UnitOfWorkProvider>,
}

impl AppBus {
    pub fn new(config: Arc<Config>, uow_provider: Arc<dyn UnitOfWorkProvider>) -> Self {
        Self {
            config,
            uow_provider,
        }
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Executes a command.
    /// A command is an operation that modifies the system state.
    /// This method manages the transaction:
    /// - It begins a Unit of Work.
    /// - It passes the UoW to the handler.
    /// - If the handler succeeds, it commits the UoW.
    /// - If the handler fails, it rolls back the UoW.
    pub async fn execute<C, H>(&self, cmd: C, handler: H) -> Result<(), ApplicationError>
    where
        C: Command,
        H: CommandHandler<C>,
    {
        let uow = self.uow_provider.begin().await?;

        match handler.handle(cmd, &uow, &self.config).await {
            Ok(_) => {
                uow.commit().await?;
                Ok(())
            }
            Err(e) => {
                uow.rollback().await?;
                Err(e)
            }
        }
    }

    /// Executes a query against stored data.
    /// The Unit of Work is always rolled back, a query never writes.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        let uow = self.uow_provider.begin().await?;

        let result = handler.handle(query, &uow, &self.config).await;

        uow.rollback().await?;

        result
    }

    /// Answers a query that needs no storage. No Unit of Work is opened.
    pub fn compute<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: ComputeHandler<Q>,
    {
        handler.handle(query, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use strategos_types::{
        Result,
        battle::BattleRecord,
        errors::{AppError, GameError},
    };

    use crate::{
        command_handlers::RecordBattleCommandHandler,
        cqrs::{commands::RecordBattle, queries::GetBattleHistory},
        memory::InMemoryUnitOfWorkProvider,
        queries_handlers::GetBattleHistoryHandler,
        test_utils::tests::{FailingUnitOfWorkProvider, battle_record_factory},
    };

    fn memory_bus() -> AppBus {
        AppBus::new(
            Arc::new(Config::default()),
            Arc::new(InMemoryUnitOfWorkProvider::new()),
        )
    }

    async fn history(bus: &AppBus, limit: Option<i64>) -> Result<Vec<BattleRecord>> {
        bus.query(GetBattleHistory { limit }, GetBattleHistoryHandler::new())
            .await
    }

    #[tokio::test]
    async fn test_execute_then_query_history() -> Result<()> {
        let bus = memory_bus();
        let now = Utc::now();

        for offset in 0..15 {
            let record = battle_record_factory(now + Duration::seconds(offset));
            bus.execute(RecordBattle { record }, RecordBattleCommandHandler::new())
                .await?;
        }

        let default_page = history(&bus, None).await?;
        let small_page = history(&bus, Some(3)).await?;

        assert_eq!(default_page.len(), 10);
        assert_eq!(small_page.len(), 3);
        assert!(
            small_page
                .windows(2)
                .all(|pair| pair[0].timestamp >= pair[1].timestamp)
        );
        assert_eq!(small_page[0].timestamp, now + Duration::seconds(14));
        Ok(())
    }

    #[tokio::test]
    async fn test_negative_history_limit_is_rejected() {
        let err = history(&memory_bus(), Some(-1)).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Game(GameError::InvalidHistoryLimit(-1))
        ));
    }

    #[tokio::test]
    async fn test_failing_store_surfaces_error() {
        let bus = AppBus::new(
            Arc::new(Config::default()),
            Arc::new(FailingUnitOfWorkProvider),
        );

        let query_err = history(&bus, None).await.unwrap_err();
        let record = battle_record_factory(Utc::now());
        let command_err = bus
            .execute(RecordBattle { record }, RecordBattleCommandHandler::new())
            .await
            .unwrap_err();

        assert!(matches!(
            query_err,
            ApplicationError::App(AppError::HistoryUnavailable(_))
        ));
        assert!(!command_err.is_validation());
    }
}
