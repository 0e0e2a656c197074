use serde::{Deserialize, Serialize};

use strategos_types::army::UnitType;

/// Base combat stats of a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitStats {
    pub attack: f64,
    pub defense: f64,
    pub hp: f64,
}

impl UnitStats {
    pub const fn new(attack: f64, defense: f64, hp: f64) -> Self {
        Self {
            attack,
            defense,
            hp,
        }
    }
}

pub const INFANTRY_STATS: UnitStats = UnitStats::new(100.0, 120.0, 800.0);
pub const RANGED_STATS: UnitStats = UnitStats::new(110.0, 80.0, 600.0);
pub const CAVALRY_STATS: UnitStats = UnitStats::new(130.0, 90.0, 700.0);
pub const SIEGE_STATS: UnitStats = UnitStats::new(200.0, 60.0, 500.0);

/// Attack multiplier for a type that counters the opponent's dominant type.
/// The countered type gets its inverse.
pub const ADVANTAGE_FACTOR: f64 = 1.5;

// Stat weights folding attack/defense/hp into one power scalar.
pub const ATTACK_WEIGHT: f64 = 1.0;
pub const DEFENSE_WEIGHT: f64 = 1.0;
pub const HP_WEIGHT: f64 = 0.125;

/// Lowest combined bonus (in %) applied to any stat.
pub const BONUS_FLOOR: f64 = -90.0;
/// Highest combined bonus (in %) applied to any stat. Keeps a multiplier
/// small enough that power over `u32::MAX` troops stays finite.
pub const BONUS_CEILING: f64 = 1_000_000.0;

pub const HIGH_CONFIDENCE_MARGIN: f64 = 0.2;
pub const MEDIUM_CONFIDENCE_MARGIN: f64 = 0.1;

/// Share of the budget seeded on the type that counters the enemy's dominant type.
pub const COUNTER_SHARE: f64 = 0.5;
/// Share of the budget seeded on the type the enemy's dominant type counters.
pub const RESERVE_SHARE: f64 = 0.2;
/// Upper bound on accepted local-search moves.
pub const SEARCH_ITERATIONS: u32 = 100;

/// Every tunable number of the engine. `Default` gives the reference values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub infantry: UnitStats,
    pub ranged: UnitStats,
    pub cavalry: UnitStats,
    pub siege: UnitStats,
    pub advantage_factor: f64,
    pub attack_weight: f64,
    pub defense_weight: f64,
    pub hp_weight: f64,
    pub bonus_floor: f64,
    pub counter_share: f64,
    pub reserve_share: f64,
    pub search_iterations: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            infantry: INFANTRY_STATS,
            ranged: RANGED_STATS,
            cavalry: CAVALRY_STATS,
            siege: SIEGE_STATS,
            advantage_factor: ADVANTAGE_FACTOR,
            attack_weight: ATTACK_WEIGHT,
            defense_weight: DEFENSE_WEIGHT,
            hp_weight: HP_WEIGHT,
            bonus_floor: BONUS_FLOOR,
            counter_share: COUNTER_SHARE,
            reserve_share: RESERVE_SHARE,
            search_iterations: SEARCH_ITERATIONS,
        }
    }
}

impl EngineConfig {
    pub fn unit_stats(&self, unit: UnitType) -> UnitStats {
        match unit {
            UnitType::Infantry => self.infantry,
            UnitType::Ranged => self.ranged,
            UnitType::Cavalry => self.cavalry,
            UnitType::Siege => self.siege,
        }
    }

    pub fn disadvantage_factor(&self) -> f64 {
        1.0 / self.advantage_factor
    }

    /// Pulls every value back into the range where power stays finite and
    /// non-negative and the optimizer seed fits the budget. Non-finite values
    /// fall back to the reference default.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let finite_or = |value: f64, fallback: f64| {
            if value.is_finite() {
                value
            } else {
                fallback
            }
        };

        let advantage_factor =
            finite_or(self.advantage_factor, defaults.advantage_factor).max(1.0);
        let counter_share = finite_or(self.counter_share, defaults.counter_share).clamp(0.0, 1.0);
        let reserve_share = finite_or(self.reserve_share, defaults.reserve_share)
            .clamp(0.0, 1.0 - counter_share);

        Self {
            advantage_factor,
            attack_weight: finite_or(self.attack_weight, defaults.attack_weight).max(0.0),
            defense_weight: finite_or(self.defense_weight, defaults.defense_weight).max(0.0),
            hp_weight: finite_or(self.hp_weight, defaults.hp_weight).max(0.0),
            bonus_floor: finite_or(self.bonus_floor, defaults.bonus_floor).clamp(-99.0, 0.0),
            counter_share,
            reserve_share,
            ..self
        }
    }
}
