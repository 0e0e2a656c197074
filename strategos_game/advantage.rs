//! Rock-paper-scissors relations between unit types.
//!
//! Infantry beats ranged, ranged beats cavalry, cavalry beats infantry.
//! Siege sits outside the cycle.

use strategos_types::{
    army::{ArmyComposition, UnitType},
    battle::TypeAdvantages,
};

use crate::constants::EngineConfig;

/// How an attacking type fares against a defending one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matchup {
    Advantage,
    Disadvantage,
    Neutral,
}

/// The type `unit` is strong against.
pub fn counters(unit: UnitType) -> Option<UnitType> {
    match unit {
        UnitType::Infantry => Some(UnitType::Ranged),
        UnitType::Ranged => Some(UnitType::Cavalry),
        UnitType::Cavalry => Some(UnitType::Infantry),
        UnitType::Siege => None,
    }
}

/// The type strong against `unit`.
pub fn countered_by(unit: UnitType) -> Option<UnitType> {
    UnitType::ALL
        .into_iter()
        .find(|candidate| counters(*candidate) == Some(unit))
}

pub fn matchup(attacker: UnitType, defender: UnitType) -> Matchup {
    if counters(attacker) == Some(defender) {
        Matchup::Advantage
    } else if counters(defender) == Some(attacker) {
        Matchup::Disadvantage
    } else {
        Matchup::Neutral
    }
}

/// The most numerous type. Ties go to the first type in
/// infantry > ranged > cavalry > siege order. `None` for an empty army.
pub fn dominant_type(composition: &ArmyComposition) -> Option<UnitType> {
    let mut dominant: Option<(UnitType, u32)> = None;
    for (unit, amount) in composition.iter() {
        if amount == 0 {
            continue;
        }
        match dominant {
            Some((_, best)) if best >= amount => {}
            _ => dominant = Some((unit, amount)),
        }
    }
    dominant.map(|(unit, _)| unit)
}

/// Attack multiplier of `unit` facing an army led by `opponent_dominant`.
pub fn attack_multiplier(
    unit: UnitType,
    opponent_dominant: Option<UnitType>,
    config: &EngineConfig,
) -> f64 {
    let Some(dominant) = opponent_dominant else {
        return 1.0;
    };
    match matchup(unit, dominant) {
        Matchup::Advantage => config.advantage_factor,
        Matchup::Disadvantage => config.disadvantage_factor(),
        Matchup::Neutral => 1.0,
    }
}

/// Share of `own` troops countering the opponent's dominant type minus the
/// share countered by it. Ranges over `[-1, 1]`.
pub fn counter_score(own: &ArmyComposition, opponent: &ArmyComposition) -> f64 {
    let total = own.total();
    let Some(dominant) = dominant_type(opponent) else {
        return 0.0;
    };
    if total == 0 {
        return 0.0;
    }

    let mut score = 0.0;
    for (unit, amount) in own.iter() {
        match matchup(unit, dominant) {
            Matchup::Advantage => score += amount as f64,
            Matchup::Disadvantage => score -= amount as f64,
            Matchup::Neutral => {}
        }
    }
    score / total as f64
}

/// Static summary of the counter cycle.
pub fn type_advantages() -> TypeAdvantages {
    let name = |unit: UnitType| counters(unit).map(|u| u.to_string()).unwrap_or_default();
    TypeAdvantages {
        infantry_counters: name(UnitType::Infantry),
        ranged_counters: name(UnitType::Ranged),
        cavalry_counters: name(UnitType::Cavalry),
    }
}
