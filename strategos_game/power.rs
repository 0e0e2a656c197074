use strategos_types::army::{ArmyComposition, ArmyConfig, UnitType};

use crate::{
    advantage::{attack_multiplier, dominant_type},
    constants::{BONUS_CEILING, EngineConfig},
};

/// Army-wide stat multipliers from hero and research bonuses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatMultipliers {
    pub attack: f64,
    pub defense: f64,
    pub hp: f64,
}

impl StatMultipliers {
    /// Hero army bonuses and research add up; the sum is clamped between
    /// `config.bonus_floor` and `BONUS_CEILING`.
    pub fn from_army(army: &ArmyConfig, config: &EngineConfig) -> Self {
        let multiplier = |hero_bonus: f64, research_bonus: f64| {
            1.0 + (hero_bonus + research_bonus).clamp(config.bonus_floor, BONUS_CEILING) / 100.0
        };

        Self {
            attack: multiplier(army.hero.army_attack, army.research_attack),
            defense: multiplier(army.hero.army_defense, army.research_defense),
            hp: multiplier(army.hero.army_hp, army.research_hp),
        }
    }
}

/// Power of a single unit of `unit`, given the army multipliers and the type
/// leading the opposing army.
pub fn unit_power(
    unit: UnitType,
    multipliers: &StatMultipliers,
    opponent_dominant: Option<UnitType>,
    config: &EngineConfig,
) -> f64 {
    let stats = config.unit_stats(unit);
    let attack =
        stats.attack * multipliers.attack * attack_multiplier(unit, opponent_dominant, config);
    let defense = stats.defense * multipliers.defense;
    let hp = stats.hp * multipliers.hp;

    config.attack_weight * attack + config.defense_weight * defense + config.hp_weight * hp
}

/// Effective power of `army` when fighting `opponent`. Always finite:
/// contributions and the running total saturate at `f64::MAX`.
pub fn calculate_power(army: &ArmyConfig, opponent: &ArmyComposition, config: &EngineConfig) -> f64 {
    let multipliers = StatMultipliers::from_army(army, config);
    let opponent_dominant = dominant_type(opponent);

    army.composition
        .iter()
        .filter(|(_, amount)| *amount > 0)
        .fold(0.0, |total, (unit, amount)| {
            let contribution =
                amount as f64 * unit_power(unit, &multipliers, opponent_dominant, config);
            (total + contribution.min(f64::MAX)).min(f64::MAX)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        ArmyConfigFactoryOptions, HeroFactoryOptions, army_config_factory, hero_factory,
    };

    #[test]
    fn test_empty_army_has_no_power() {
        let config = EngineConfig::default();
        let army = army_config_factory(ArmyConfigFactoryOptions::default());
        assert_eq!(
            calculate_power(&army, &ArmyComposition::new(10, 10, 10, 10), &config),
            0.0
        );
    }

    #[test]
    fn test_plain_infantry_against_empty_opponent() {
        let config = EngineConfig::default();
        let army = army_config_factory(ArmyConfigFactoryOptions {
            composition: Some(ArmyComposition::new(10, 0, 0, 0)),
            ..Default::default()
        });

        // 100 attack + 120 defense + 800 hp * 0.125
        let power = calculate_power(&army, &ArmyComposition::default(), &config);
        assert_eq!(power, 10.0 * 320.0);
    }

    #[test]
    fn test_type_advantage_applies_to_attack_only() {
        let config = EngineConfig::default();
        let army = army_config_factory(ArmyConfigFactoryOptions {
            composition: Some(ArmyComposition::new(1, 0, 0, 0)),
            ..Default::default()
        });

        let vs_ranged = calculate_power(&army, &ArmyComposition::new(0, 10, 0, 0), &config);
        let vs_cavalry = calculate_power(&army, &ArmyComposition::new(0, 0, 10, 0), &config);
        let vs_siege = calculate_power(&army, &ArmyComposition::new(0, 0, 0, 10), &config);

        assert_eq!(vs_ranged, 150.0 + 120.0 + 100.0);
        assert!((vs_cavalry - (100.0 / 1.5 + 220.0)).abs() < 1e-9);
        assert_eq!(vs_siege, 320.0);
    }

    #[test]
    fn test_huge_bonuses_keep_power_finite() {
        let config = EngineConfig::default();
        let army = army_config_factory(ArmyConfigFactoryOptions {
            composition: Some(ArmyComposition::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX)),
            hero: Some(hero_factory(HeroFactoryOptions {
                army_attack: Some(f64::MAX),
                army_hp: Some(1e308),
                ..Default::default()
            })),
            research_attack: Some(f64::MAX),
            research_defense: Some(1e308),
            ..Default::default()
        });

        let multipliers = StatMultipliers::from_army(&army, &config);
        assert_eq!(multipliers.attack, 1.0 + BONUS_CEILING / 100.0);

        let power = calculate_power(&army, &ArmyComposition::new(0, 10, 0, 0), &config);
        assert!(power.is_finite());
        assert!(power > 0.0);
    }

    #[test]
    fn test_power_saturates_on_oversized_stats() {
        let config = EngineConfig {
            siege: crate::constants::UnitStats::new(f64::MAX, 0.0, 0.0),
            ..Default::default()
        };
        let army = army_config_factory(ArmyConfigFactoryOptions {
            composition: Some(ArmyComposition::new(0, 0, 0, 1000)),
            research_attack: Some(500.0),
            ..Default::default()
        });

        let power = calculate_power(&army, &ArmyComposition::default(), &config);
        assert_eq!(power, f64::MAX);
    }

    #[test]
    fn test_hero_and_research_bonuses_add_up() {
        let config = EngineConfig::default();
        let army = army_config_factory(ArmyConfigFactoryOptions {
            composition: Some(ArmyComposition::new(0, 0, 0, 1)),
            hero: Some(hero_factory(HeroFactoryOptions {
                army_attack: Some(10.0),
                ..Default::default()
            })),
            research_attack: Some(40.0),
            ..Default::default()
        });

        let multipliers = StatMultipliers::from_army(&army, &config);
        assert_eq!(multipliers.attack, 1.5);
        assert_eq!(multipliers.defense, 1.0);

        // siege: 200 * 1.5 + 60 + 500 * 0.125
        let power = calculate_power(&army, &ArmyComposition::default(), &config);
        assert_eq!(power, 300.0 + 60.0 + 62.5);
    }

    #[test]
    fn test_negative_bonuses_are_floored() {
        let config = EngineConfig::default();
        let army = army_config_factory(ArmyConfigFactoryOptions {
            composition: Some(ArmyComposition::new(100, 100, 100, 100)),
            hero: Some(hero_factory(HeroFactoryOptions {
                army_attack: Some(-500.0),
                army_defense: Some(-80.0),
                army_hp: Some(-1e9),
                ..Default::default()
            })),
            research_attack: Some(-500.0),
            research_defense: Some(-80.0),
            research_hp: Some(0.0),
        });

        let multipliers = StatMultipliers::from_army(&army, &config);
        assert!((multipliers.attack - 0.1).abs() < 1e-12);
        assert!((multipliers.defense - 0.1).abs() < 1e-12);
        assert!((multipliers.hp - 0.1).abs() < 1e-12);

        let power = calculate_power(&army, &ArmyComposition::new(1, 1, 1, 1), &config);
        assert!(power > 0.0);
    }

    #[test]
    fn test_research_attack_is_monotonic() {
        let config = EngineConfig::default();
        let opponent = ArmyComposition::new(300, 200, 100, 0);
        let mut previous = 0.0;

        for research in [-200.0, -90.0, -10.0, 0.0, 5.0, 25.0, 100.0, 1_000.0] {
            let army = army_config_factory(ArmyConfigFactoryOptions {
                composition: Some(ArmyComposition::new(50, 40, 30, 20)),
                research_attack: Some(research),
                ..Default::default()
            });
            let power = calculate_power(&army, &opponent, &config);
            assert!(power >= previous, "power decreased at research {research}");
            previous = power;
        }
    }

    #[test]
    fn test_power_is_deterministic() {
        let config = EngineConfig::default();
        let army = army_config_factory(ArmyConfigFactoryOptions {
            composition: Some(ArmyComposition::new(1234, 567, 89, 10)),
            research_hp: Some(17.3),
            ..Default::default()
        });
        let opponent = ArmyComposition::new(10, 20, 30, 40);

        let first = calculate_power(&army, &opponent, &config);
        let second = calculate_power(&army, &opponent, &config);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
