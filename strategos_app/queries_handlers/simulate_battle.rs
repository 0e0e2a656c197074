use std::sync::Arc;

use strategos_game::{battle::Battle, validation::validate_army};
use strategos_types::{battle::BattleResult, errors::ApplicationError};

use crate::{
    config::Config,
    cqrs::{ComputeHandler, queries::SimulateBattle},
};

pub struct SimulateBattleHandler;

impl SimulateBattleHandler {
    pub fn new() -> Self {
        Self
    }
}

impl ComputeHandler<SimulateBattle> for SimulateBattleHandler {
    fn handle(
        &self,
        query: SimulateBattle,
        config: &Arc<Config>,
    ) -> Result<BattleResult, ApplicationError> {
        validate_army("player_army", &query.player_army)?;
        validate_army("enemy_army", &query.enemy_army)?;

        let result =
            Battle::new(&query.player_army, &query.enemy_army, &config.engine).calculate_battle();

        tracing::info!(
            scenario = %query.scenario,
            player_troops = query.player_army.composition.total(),
            enemy_troops = query.enemy_army.composition.total(),
            win_probability = result.win_probability,
            confidence = %result.confidence_level,
            "Battle simulated"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strategos_game::test_utils::{
        ArmyConfigFactoryOptions, HeroFactoryOptions, army_config_factory, hero_factory,
        sample_matchup,
    };
    use strategos_types::{Result, army::ArmyConfig, errors::GameError};

    fn simulate(player_army: ArmyConfig, enemy_army: ArmyConfig) -> Result<BattleResult> {
        let config = Arc::new(Config::default());
        SimulateBattleHandler::new().handle(
            SimulateBattle {
                player_army,
                enemy_army,
                scenario: "field_battle".to_string(),
            },
            &config,
        )
    }

    #[test]
    fn test_simulate_sample_matchup() -> Result<()> {
        let (player, enemy) = sample_matchup();
        let result = simulate(player, enemy)?;

        assert!(result.win_probability > 0.5);
        assert!(result.details.player_power > result.details.enemy_power);
        Ok(())
    }

    #[test]
    fn test_simulate_rejects_non_finite_bonus() {
        let player = army_config_factory(ArmyConfigFactoryOptions {
            hero: Some(hero_factory(HeroFactoryOptions {
                army_attack: Some(f64::NAN),
                ..Default::default()
            })),
            ..Default::default()
        });
        let (_, enemy) = sample_matchup();

        let err = simulate(player, enemy).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Game(GameError::InvalidBonus { ref field })
                if field == "player_army.hero.army_attack"
        ));
    }

    #[test]
    fn test_simulate_rejects_infinite_enemy_research() {
        let (player, _) = sample_matchup();
        let enemy = army_config_factory(ArmyConfigFactoryOptions {
            research_hp: Some(f64::INFINITY),
            ..Default::default()
        });

        let err = simulate(player, enemy).unwrap_err();
        assert!(err.is_validation());
    }
}
