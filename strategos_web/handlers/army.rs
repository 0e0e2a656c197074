use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use strategos_app::{cqrs::queries::OptimizeArmy, queries_handlers::OptimizeArmyHandler};
use strategos_game::validation::composition_from_counts;
use strategos_types::{
    army::{ArmyComposition, UnitType},
    battle::OptimizationResult,
    errors::GameError,
};

use crate::{
    handlers::{ApiError, DEFAULT_SCENARIO},
    http::AppState,
};

#[derive(Debug, Deserialize)]
pub struct OptimizeArmyParams {
    pub total_troops: i64,
    pub enemy_infantry: Option<i64>,
    pub enemy_ranged: Option<i64>,
    pub enemy_cavalry: Option<i64>,
    pub enemy_siege: Option<i64>,
    pub scenario: Option<String>,
}

impl OptimizeArmyParams {
    /// `None` when no enemy count was given at all.
    fn enemy_composition(&self) -> Result<Option<ArmyComposition>, GameError> {
        let counts = [
            self.enemy_infantry,
            self.enemy_ranged,
            self.enemy_cavalry,
            self.enemy_siege,
        ];
        if counts.iter().all(Option::is_none) {
            return Ok(None);
        }

        composition_from_counts(counts.map(|c| c.unwrap_or(0)), |unit: UnitType| {
            format!("enemy_{unit}")
        })
        .map(Some)
    }
}

/// GET /api/army/optimize?total_troops=&enemy_infantry=&enemy_ranged=&enemy_cavalry=&enemy_siege=
pub async fn optimize_army(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<OptimizeArmyParams>, ApiError>,
) -> Result<Json<OptimizationResult>, ApiError> {
    let query = OptimizeArmy {
        total_troops: params.total_troops,
        enemy_composition: params.enemy_composition()?,
        scenario: params
            .scenario
            .unwrap_or_else(|| DEFAULT_SCENARIO.to_string()),
    };

    let result = state.app_bus.compute(query, OptimizeArmyHandler::new())?;
    Ok(Json(result))
}
