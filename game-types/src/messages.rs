use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{GuessAttempt, SessionView};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SubmitGuessRequest {
    pub user_id: String,
    pub guess: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessResponse {
    pub message: String, // "Correct!" or "Incorrect!"
    pub attempt: GuessAttempt,
    pub session: SessionView,
}

impl GuessResponse {
    pub const CORRECT: &'static str = "Correct!";
    pub const INCORRECT: &'static str = "Incorrect!";

    pub fn new(attempt: GuessAttempt, session: SessionView) -> Self {
        let message = if attempt.feedback.is_correct {
            Self::CORRECT
        } else {
            Self::INCORRECT
        };

        Self {
            message: message.to_string(),
            attempt,
            session,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewUserResponse {
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShareResponse {
    pub text: String,
}
