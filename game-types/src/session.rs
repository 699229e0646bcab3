use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::{Feedback, MAX_GUESSES, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SessionStatus {
    NotStarted, // New day, no target assigned yet
    InProgress, // Target assigned, guesses being accepted
    Won,        // Answer found
    Lost,       // Guesses exhausted
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Won | SessionStatus::Lost)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::NotStarted => "not_started",
            SessionStatus::InProgress => "in_progress",
            SessionStatus::Won => "won",
            SessionStatus::Lost => "lost",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_started" => Ok(SessionStatus::NotStarted),
            "in_progress" => Ok(SessionStatus::InProgress),
            "won" => Ok(SessionStatus::Won),
            "lost" => Ok(SessionStatus::Lost),
            other => Err(format!("Unknown session status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GuessAttempt {
    pub ordinal: usize, // 0-based position in the day's attempts
    pub player: Player,
    pub feedback: Feedback,
}

/// One user's game for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Session {
    pub user_id: String,
    pub played_on: String, // YYYY-MM-DD
    pub target_name: Option<String>,
    pub status: SessionStatus,
    pub attempts: Vec<GuessAttempt>,
}

impl Session {
    pub fn new(user_id: impl Into<String>, played_on: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            played_on: played_on.into(),
            target_name: None,
            status: SessionStatus::NotStarted,
            attempts: Vec::new(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn input_enabled(&self) -> bool {
        !self.is_terminal() && self.attempts.len() < MAX_GUESSES
    }

    pub fn attempts_remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.attempts.len())
    }
}

/// Client-facing view of a session that only reveals the answer once the day is over
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionView {
    pub played_on: String,
    pub status: SessionStatus,
    pub attempts: Vec<GuessAttempt>,
    pub attempts_remaining: usize,
    pub input_enabled: bool,
    pub answer: Option<Player>,
}
