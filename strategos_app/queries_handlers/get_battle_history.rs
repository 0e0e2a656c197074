use std::sync::Arc;

use strategos_types::{
    battle::BattleRecord,
    errors::{ApplicationError, GameError},
};

use crate::{
    config::Config,
    cqrs::{QueryHandler, queries::GetBattleHistory},
    uow::UnitOfWork,
};

pub struct GetBattleHistoryHandler;

impl GetBattleHistoryHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl QueryHandler<GetBattleHistory> for GetBattleHistoryHandler {
    async fn handle(
        &self,
        query: GetBattleHistory,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        config: &Arc<Config>,
    ) -> Result<Vec<BattleRecord>, ApplicationError> {
        let limit = effective_limit(query.limit, config)?;
        uow.history().recent(limit).await
    }
}

/// Missing limit means the configured default; anything above the maximum is capped.
fn effective_limit(requested: Option<i64>, config: &Config) -> Result<u32, GameError> {
    match requested {
        None => Ok(config.history_default_limit.min(config.history_max_limit)),
        Some(limit) if limit < 0 => Err(GameError::InvalidHistoryLimit(limit)),
        Some(limit) => Ok(u32::try_from(limit)
            .unwrap_or(u32::MAX)
            .min(config.history_max_limit)),
    }
}
