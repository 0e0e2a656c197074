use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};

use strategos_app::{cqrs::queries::GetBattleHistory, queries_handlers::GetBattleHistoryHandler};
use strategos_types::battle::BattleRecord;

use crate::{handlers::ApiError, http::AppState};

#[derive(Debug, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub battles: Vec<BattleRecord>,
}

/// GET /api/battle/history?limit=N
pub async fn battle_history(
    State(state): State<AppState>,
    WithRejection(Query(params), _): WithRejection<Query<HistoryParams>, ApiError>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let battles = state
        .app_bus
        .query(
            GetBattleHistory {
                limit: params.limit,
            },
            GetBattleHistoryHandler::new(),
        )
        .await?;

    Ok(Json(HistoryResponse { battles }))
}
