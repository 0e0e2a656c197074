use thiserror::Error;

/// Errors for domain logic: input rejected before any computation.
#[derive(Debug, Error, PartialEq)]
pub enum GameError {
    #[error("{field} cannot be negative (got {value})")]
    NegativeTroopCount { field: String, value: i64 },

    #[error("{field} exceeds the maximum troop count (got {value})")]
    TroopCountOverflow { field: String, value: i64 },

    #[error("total_troops cannot be negative (got {0})")]
    NegativeTotalTroops(i64),

    #[error("{field} must be a finite number")]
    InvalidBonus { field: String },

    #[error("limit cannot be negative (got {0})")]
    InvalidHistoryLimit(i64),
}
