use chrono::Utc;
use uuid::Uuid;

use strategos_types::{
    battle::{BattleRecord, BattleReport},
    errors::ApplicationError,
};

use crate::{
    app_bus::AppBus,
    command_handlers::RecordBattleCommandHandler,
    cqrs::{commands::RecordBattle, queries::SimulateBattle},
    queries_handlers::SimulateBattleHandler,
};

/// Runs a simulation, then files it in history.
/// The result is returned even when the history append fails: recording is
/// best effort and only logged.
pub async fn simulate_and_record(
    bus: &AppBus,
    query: SimulateBattle,
) -> Result<BattleReport, ApplicationError> {
    let player_army = query.player_army.clone();
    let enemy_army = query.enemy_army.clone();
    let scenario = query.scenario.clone();

    let result = bus.compute(query, SimulateBattleHandler::new())?;
    let battle_id = Uuid::new_v4();

    let record = BattleRecord {
        battle_id,
        timestamp: Utc::now(),
        scenario,
        player_army,
        enemy_army,
        result: result.clone(),
    };

    if let Err(e) = bus
        .execute(RecordBattle { record }, RecordBattleCommandHandler::new())
        .await
    {
        tracing::warn!(%battle_id, error = %e, "Unable to record battle in history");
    }

    Ok(BattleReport { battle_id, result })
}
