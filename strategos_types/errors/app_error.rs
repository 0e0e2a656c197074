use thiserror::Error;

/// Errors for app logic.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("History store is unavailable: {0}")]
    HistoryUnavailable(String),
}
