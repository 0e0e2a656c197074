use strategos_types::{
    army::{ArmyComposition, ArmyConfig},
    battle::{BattleRecord, BattleResult, OptimizationResult},
};

use crate::cqrs::Query;

/// Runs the battle engine on two armies.
#[derive(Debug, Clone)]
pub struct SimulateBattle {
    pub player_army: ArmyConfig,
    pub enemy_army: ArmyConfig,
    /// Free-form label carried into logs and history. Does not affect the result.
    pub scenario: String,
}

impl Query for SimulateBattle {
    type Output = BattleResult;
}

/// Suggests a composition of `total_troops` against an enemy composition.
/// `total_troops` stays signed so a negative budget is reported, not wrapped.
#[derive(Debug, Clone)]
pub struct OptimizeArmy {
    pub total_troops: i64,
    pub enemy_composition: Option<ArmyComposition>,
    pub scenario: String,
}

impl Query for OptimizeArmy {
    type Output = OptimizationResult;
}

/// Most recent simulations, newest first.
#[derive(Debug, Clone, Default)]
pub struct GetBattleHistory {
    pub limit: Option<i64>,
}

impl Query for GetBattleHistory {
    type Output = Vec<BattleRecord>;
}
