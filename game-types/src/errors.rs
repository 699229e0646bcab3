use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, thiserror::Error)]
#[ts(export)]
pub enum GameError {
    #[error("Player not recognized: {name}")]
    UnknownPlayer { name: String },
    #[error("Today's game is already over")]
    SessionComplete,
    #[error("No guesses remaining today")]
    GuessLimitReached,
    #[error("A guess is already being submitted")]
    SubmissionInProgress,
    #[error("Player of the day unavailable: {message}")]
    TargetUnavailable { message: String },
    #[error("Storage error: {message}")]
    Storage { message: String },
    #[error("Invalid attempt count: {attempts}")]
    InvalidAttemptCount { attempts: usize },
}
