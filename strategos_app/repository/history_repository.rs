use strategos_types::{battle::BattleRecord, errors::ApplicationError};

#[async_trait::async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Stores one simulation record.
    async fn append(&self, record: &BattleRecord) -> Result<(), ApplicationError>;

    /// Returns at most `limit` records, newest first.
    async fn recent(&self, limit: u32) -> Result<Vec<BattleRecord>, ApplicationError>;
}
