use thiserror::Error;

use chargesim_sim::ScenarioError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("{0} thread panicked")]
    ThreadPanicked(&'static str),
}

pub type AppResult<T> = Result<T, AppError>;
