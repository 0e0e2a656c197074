#[cfg(any(test, feature = "test-utils"))]
#[cfg(not(tarpaulin_include))]
pub mod tests {
    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use std::sync::Arc;
    use uuid::Uuid;

    use strategos_game::{battle::Battle, constants::EngineConfig, test_utils::sample_matchup};
    use strategos_types::{
        battle::BattleRecord,
        errors::{AppError, ApplicationError},
    };

    use crate::{
        repository::HistoryRepository,
        uow::{UnitOfWork, UnitOfWorkProvider},
    };

    /// A record of the sample matchup filed at `timestamp`.
    pub fn battle_record_factory(timestamp: DateTime<Utc>) -> BattleRecord {
        let (player_army, enemy_army) = sample_matchup();
        let result = Battle::new(&player_army, &enemy_army, &EngineConfig::default())
            .calculate_battle();

        BattleRecord {
            battle_id: Uuid::new_v4(),
            timestamp,
            scenario: "field_battle".to_string(),
            player_army,
            enemy_army,
            result,
        }
    }

    fn unavailable() -> ApplicationError {
        AppError::HistoryUnavailable("history store is down".to_string()).into()
    }

    /// A history store whose every operation fails.
    #[derive(Default, Clone)]
    pub struct FailingHistoryRepository;

    #[async_trait]
    impl HistoryRepository for FailingHistoryRepository {
        async fn append(&self, _record: &BattleRecord) -> Result<(), ApplicationError> {
            Err(unavailable())
        }

        async fn recent(&self, _limit: u32) -> Result<Vec<BattleRecord>, ApplicationError> {
            Err(unavailable())
        }
    }

    pub struct FailingUnitOfWork;

    #[async_trait]
    impl<'a> UnitOfWork<'a> for FailingUnitOfWork {
        fn history(&self) -> Arc<dyn HistoryRepository + 'a> {
            Arc::new(FailingHistoryRepository)
        }

        async fn commit(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }

        async fn rollback(self: Box<Self>) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    pub struct FailingUnitOfWorkProvider;

    #[async_trait]
    impl UnitOfWorkProvider for FailingUnitOfWorkProvider {
        async fn begin<'p>(&'p self) -> Result<Box<dyn UnitOfWork<'p> + 'p>, ApplicationError> {
            Ok(Box::new(FailingUnitOfWork))
        }
    }
}
