use std::sync::Arc;

use strategos_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{CommandHandler, commands::RecordBattle},
    uow::UnitOfWork,
};

pub struct RecordBattleCommandHandler;

impl RecordBattleCommandHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl CommandHandler<RecordBattle> for RecordBattleCommandHandler {
    async fn handle(
        &self,
        command: RecordBattle,
        uow: &Box<dyn UnitOfWork<'_> + '_>,
        _config: &Arc<Config>,
    ) -> Result<(), ApplicationError> {
        uow.history().append(&command.record).await
    }
}
