//! Turns raw request values into engine inputs, rejecting anything the
//! engine cannot represent before a single number is computed.

use strategos_types::{
    army::{ArmyComposition, ArmyConfig, UnitType},
    errors::GameError,
};

pub fn troop_count(field: &str, value: i64) -> Result<u32, GameError> {
    if value < 0 {
        return Err(GameError::NegativeTroopCount {
            field: field.to_string(),
            value,
        });
    }
    u32::try_from(value).map_err(|_| GameError::TroopCountOverflow {
        field: field.to_string(),
        value,
    })
}

/// Builds a composition from signed counts given in
/// infantry, ranged, cavalry, siege order. `field` names each count in errors.
pub fn composition_from_counts(
    counts: [i64; 4],
    field: impl Fn(UnitType) -> String,
) -> Result<ArmyComposition, GameError> {
    let mut composition = ArmyComposition::default();
    for (unit, value) in UnitType::ALL.into_iter().zip(counts) {
        composition.set(unit, troop_count(&field(unit), value)?);
    }
    Ok(composition)
}

pub fn bonus(field: &str, value: f64) -> Result<f64, GameError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GameError::InvalidBonus {
            field: field.to_string(),
        })
    }
}

/// Checks every bonus of an army is a finite number. `side` prefixes field
/// names in errors (e.g. `player_army`).
pub fn validate_army(side: &str, army: &ArmyConfig) -> Result<(), GameError> {
    let research = [
        ("research_attack", army.research_attack),
        ("research_defense", army.research_defense),
        ("research_hp", army.research_hp),
    ];

    for (field, value) in army.hero.bonuses().into_iter().chain(research) {
        bonus(&format!("{side}.{field}"), value)?;
    }
    Ok(())
}
