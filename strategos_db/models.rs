use chrono::{DateTime, Utc};
use sqlx::{FromRow, types::Json};
use uuid::Uuid;

use strategos_types::{army::ArmyConfig, battle::BattleResult};

#[derive(Debug, FromRow, Clone)]
pub struct Battle {
    pub battle_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub scenario: String,
    pub player_army: Json<ArmyConfig>,
    pub enemy_army: Json<ArmyConfig>,
    pub result: Json<BattleResult>,
}
