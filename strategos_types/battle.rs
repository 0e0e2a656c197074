use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::army::{ArmyComposition, ArmyConfig};

/// How far a win probability sits from a coin flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::High => "High",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BattleDetails {
    pub player_power: f64,
    pub enemy_power: f64,
    /// Player's net counter score minus the enemy's, in `[-2, 2]`.
    pub type_advantage: f64,
}

/// Predicted outcome of a battle. Contains no ids or timestamps, so the same
/// input always yields the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    pub win_probability: f64,
    pub confidence_level: ConfidenceLevel,
    pub details: BattleDetails,
    pub recommendation: String,
    pub expected_losses: ArmyComposition,
    pub enemy_losses: ArmyComposition,
}

/// Static rock-paper-scissors summary returned with every optimization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAdvantages {
    pub infantry_counters: String,
    pub ranged_counters: String,
    pub cavalry_counters: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub optimal_composition: ArmyComposition,
    pub reasoning: String,
    pub type_advantages: TypeAdvantages,
}

/// A simulation stored in the battle history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleRecord {
    pub battle_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub scenario: String,
    pub player_army: ArmyConfig,
    pub enemy_army: ArmyConfig,
    pub result: BattleResult,
}

/// A simulation answer as returned to callers: the engine result plus the
/// identifier under which it was filed in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    pub battle_id: Uuid,
    #[serde(flatten)]
    pub result: BattleResult,
}
