use sqlx::{Postgres, Transaction, types::Json};
use std::sync::Arc;
use tokio::sync::Mutex;

use strategos_app::repository::HistoryRepository;
use strategos_types::{
    Result,
    battle::BattleRecord,
    errors::{ApplicationError, DbError},
};

use crate::models as db_models;

#[derive(Clone)]
pub struct PostgresHistoryRepository<'a> {
    tx: Arc<Mutex<Transaction<'a, Postgres>>>,
}

impl<'a> PostgresHistoryRepository<'a> {
    pub fn new(tx: Arc<Mutex<Transaction<'a, Postgres>>>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl<'a> HistoryRepository for PostgresHistoryRepository<'a> {
    async fn append(&self, record: &BattleRecord) -> Result<(), ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        sqlx::query(
            r#"
            INSERT INTO battles (battle_id, created_at, scenario, player_army, enemy_army, result, win_probability)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.battle_id)
        .bind(record.timestamp)
        .bind(&record.scenario)
        .bind(Json(&record.player_army))
        .bind(Json(&record.enemy_army))
        .bind(Json(&record.result))
        .bind(record.result.win_probability)
        .execute(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(())
    }

    async fn recent(&self, limit: u32) -> Result<Vec<BattleRecord>, ApplicationError> {
        let mut tx_guard = self.tx.lock().await;

        let rows: Vec<db_models::Battle> = sqlx::query_as(
            r#"
            SELECT battle_id, created_at, scenario, player_army, enemy_army, result
            FROM battles
            ORDER BY created_at DESC, battle_id
            LIMIT $1
            "#,
        )
        .bind(i64::from(limit))
        .fetch_all(&mut *tx_guard.as_mut())
        .await
        .map_err(|e| ApplicationError::Db(DbError::Database(e)))?;

        Ok(rows.into_iter().map(BattleRecord::from).collect())
    }
}
