use strategos_types::battle::BattleRecord;

use crate::models as db_models;

impl From<db_models::Battle> for BattleRecord {
    fn from(row: db_models::Battle) -> Self {
        BattleRecord {
            battle_id: row.battle_id,
            timestamp: row.created_at,
            scenario: row.scenario,
            player_army: row.player_army.0,
            enemy_army: row.enemy_army.0,
            result: row.result.0,
        }
    }
}
