use strategos_types::army::{ArmyComposition, ArmyConfig, UnitType};

use crate::{
    advantage::{Matchup, dominant_type, matchup},
    constants::EngineConfig,
    outcome::win_probability,
};

/// Share of its troops a side is expected to lose: the opponent's share of
/// the total power on the field.
pub fn loss_fraction(own_power: f64, opponent_power: f64) -> f64 {
    win_probability(opponent_power, own_power)
}

/// Expected `(player, enemy)` losses per unit type.
pub fn estimate_losses(
    player: &ArmyConfig,
    enemy: &ArmyConfig,
    player_power: f64,
    enemy_power: f64,
    config: &EngineConfig,
) -> (ArmyComposition, ArmyComposition) {
    let player_losses = side_losses(
        &player.composition,
        &enemy.composition,
        loss_fraction(player_power, enemy_power),
        config,
    );
    let enemy_losses = side_losses(
        &enemy.composition,
        &player.composition,
        loss_fraction(enemy_power, player_power),
        config,
    );
    (player_losses, enemy_losses)
}

/// Spreads `fraction` of `own` troops over its unit types. Types countered by
/// the opponent's dominant type weigh `advantage_factor` times more; the
/// weights are renormalized so the side's total loss stays `fraction` of its
/// troops. Each entry is floored and capped at the type's count.
fn side_losses(
    own: &ArmyComposition,
    opponent: &ArmyComposition,
    fraction: f64,
    config: &EngineConfig,
) -> ArmyComposition {
    let total = own.total() as f64;
    if total == 0.0 || fraction <= 0.0 {
        return ArmyComposition::default();
    }

    let opponent_dominant = dominant_type(opponent);
    let bias = |unit: UnitType| match opponent_dominant.map(|d| matchup(unit, d)) {
        Some(Matchup::Disadvantage) => config.advantage_factor,
        _ => 1.0,
    };

    let weighted_total: f64 = own
        .iter()
        .map(|(unit, amount)| amount as f64 * bias(unit))
        .sum();
    let total_losses = fraction.min(1.0) * total;

    let mut losses = ArmyComposition::default();
    for (unit, amount) in own.iter().filter(|(_, amount)| *amount > 0) {
        let share = amount as f64 * bias(unit) / weighted_total;
        let lost = (total_losses * share).floor().min(amount as f64);
        losses.set(unit, lost as u32);
    }
    losses
}
