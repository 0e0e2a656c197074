use axum::{Json, extract::State};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use strategos_app::{cqrs::queries::SimulateBattle, helpers::simulate_and_record};
use strategos_game::validation::{composition_from_counts, validate_army};
use strategos_types::{
    army::{ArmyConfig, UnitType},
    battle::BattleReport,
    errors::GameError,
    hero::Hero,
};

use crate::{handlers::ApiError, http::AppState};

pub const DEFAULT_SCENARIO: &str = "field_battle";

/// Troop counts as sent by clients. Counts are signed so that a negative
/// value is reported with its field name instead of failing to parse.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositionPayload {
    pub infantry: i64,
    pub ranged: i64,
    pub cavalry: i64,
    pub siege: i64,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroPayload {
    pub name: Option<String>,
    pub attack_bonus: Option<f64>,
    pub defense_bonus: Option<f64>,
    pub hp_bonus: Option<f64>,
    pub army_attack: Option<f64>,
    pub army_defense: Option<f64>,
    pub army_hp: Option<f64>,
}

impl From<HeroPayload> for Hero {
    fn from(payload: HeroPayload) -> Self {
        Hero {
            name: payload.name.unwrap_or_default(),
            attack_bonus: payload.attack_bonus.unwrap_or(0.0),
            defense_bonus: payload.defense_bonus.unwrap_or(0.0),
            hp_bonus: payload.hp_bonus.unwrap_or(0.0),
            army_attack: payload.army_attack.unwrap_or(0.0),
            army_defense: payload.army_defense.unwrap_or(0.0),
            army_hp: payload.army_hp.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmyConfigPayload {
    pub composition: CompositionPayload,
    pub hero: Option<HeroPayload>,
    pub research_attack: Option<f64>,
    pub research_defense: Option<f64>,
    pub research_hp: Option<f64>,
}

impl ArmyConfigPayload {
    /// Validates the payload into an engine army. `side` prefixes field
    /// names in errors, e.g. `enemy_army.composition.siege`.
    pub fn into_army(self, side: &str) -> Result<ArmyConfig, GameError> {
        let counts = [
            self.composition.infantry,
            self.composition.ranged,
            self.composition.cavalry,
            self.composition.siege,
        ];
        let composition =
            composition_from_counts(counts, |unit: UnitType| format!("{side}.composition.{unit}"))?;

        let army = ArmyConfig {
            composition,
            hero: self.hero.map(Hero::from).unwrap_or_default(),
            research_attack: self.research_attack.unwrap_or(0.0),
            research_defense: self.research_defense.unwrap_or(0.0),
            research_hp: self.research_hp.unwrap_or(0.0),
        };
        validate_army(side, &army)?;

        Ok(army)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulateBattleRequest {
    pub player_army: ArmyConfigPayload,
    pub enemy_army: ArmyConfigPayload,
    pub scenario: Option<String>,
}

/// POST /api/battle/simulate
pub async fn simulate_battle(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<SimulateBattleRequest>, ApiError>,
) -> Result<Json<BattleReport>, ApiError> {
    let query = SimulateBattle {
        player_army: request.player_army.into_army("player_army")?,
        enemy_army: request.enemy_army.into_army("enemy_army")?,
        scenario: request
            .scenario
            .unwrap_or_else(|| DEFAULT_SCENARIO.to_string()),
    };

    let report = simulate_and_record(&state.app_bus, query).await?;
    Ok(Json(report))
}
