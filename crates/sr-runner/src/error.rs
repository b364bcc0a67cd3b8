use sr_history::HistoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("no scenario loaded")]
    NoScenario,

    #[error("runner configuration error: {0}")]
    Config(String),

    #[error("failed to start watchdog thread: {0}")]
    Watchdog(#[source] std::io::Error),

    #[error("actor history error: {0}")]
    History(#[from] HistoryError),
}

pub type RunnerResult<T> = Result<T, RunnerError>;
