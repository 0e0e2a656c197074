use strategos_types::{
    army::ArmyConfig,
    battle::{BattleDetails, BattleResult},
};

use crate::{
    advantage::{counter_score, dominant_type},
    constants::EngineConfig,
    losses::estimate_losses,
    outcome::{confidence_level, recommendation, win_probability},
    power::calculate_power,
};

/// A predicted engagement between the player's army and an enemy army.
pub struct Battle<'a> {
    player: &'a ArmyConfig,
    enemy: &'a ArmyConfig,
    config: &'a EngineConfig,
}

impl<'a> Battle<'a> {
    pub fn new(player: &'a ArmyConfig, enemy: &'a ArmyConfig, config: &'a EngineConfig) -> Self {
        Self {
            player,
            enemy,
            config,
        }
    }

    /// Main function to calculate the battle.
    pub fn calculate_battle(&self) -> BattleResult {
        // ====================================================================
        // STEP 1: Power of each side, measured against the other's troops
        // ====================================================================
        let player_power = calculate_power(self.player, &self.enemy.composition, self.config);
        let enemy_power = calculate_power(self.enemy, &self.player.composition, self.config);

        // ====================================================================
        // STEP 2: Outcome
        // ====================================================================
        let probability = win_probability(player_power, enemy_power);
        let type_advantage = counter_score(&self.player.composition, &self.enemy.composition)
            - counter_score(&self.enemy.composition, &self.player.composition);
        let advice = recommendation(
            probability,
            type_advantage,
            dominant_type(&self.enemy.composition),
        );

        // ====================================================================
        // STEP 3: Casualties
        // ====================================================================
        let (expected_losses, enemy_losses) = estimate_losses(
            self.player,
            self.enemy,
            player_power,
            enemy_power,
            self.config,
        );

        tracing::debug!(
            player_power,
            enemy_power,
            probability,
            type_advantage,
            "Battle calculated"
        );

        BattleResult {
            win_probability: probability,
            confidence_level: confidence_level(probability),
            details: BattleDetails {
                player_power,
                enemy_power,
                type_advantage,
            },
            recommendation: advice,
            expected_losses,
            enemy_losses,
        }
    }
}
