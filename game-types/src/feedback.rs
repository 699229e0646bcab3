use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum FieldStatus {
    Correct,   // Green - exact match
    Close,     // Yellow - within tolerance but not equal
    Incorrect, // Black - everything else
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PositionStatus {
    Correct,   // Same set of roles
    Partial,   // At least one shared role
    Incorrect, // No shared roles
}

/// Where the guessed value sits relative to the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Hint {
    Higher, // guessed value is above the answer
    Lower,  // guessed value is below the answer
    Equal,
}

impl Hint {
    /// Arrow pointing from the guess towards the answer
    pub fn arrow(self) -> &'static str {
        match self {
            Hint::Lower => "↑",
            Hint::Higher => "↓",
            Hint::Equal => "",
        }
    }
}

/// Scored fields in the order they appear on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ScoredField {
    Name,
    Position,
    Number,
    Height,
    Debut,
    AllStarAppearances,
}

impl ScoredField {
    pub const ALL: [ScoredField; 6] = [
        ScoredField::Name,
        ScoredField::Position,
        ScoredField::Number,
        ScoredField::Height,
        ScoredField::Debut,
        ScoredField::AllStarAppearances,
    ];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldFeedback {
    pub status: FieldStatus,
    pub hint: Option<Hint>, // None when the values cannot be ordered
}

/// Per-field result of scoring one guess against the answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Feedback {
    pub name: FieldStatus,
    pub position: PositionStatus,
    pub number: FieldFeedback,
    pub height: FieldFeedback,
    pub debut: FieldFeedback,
    pub all_star_appearances: FieldFeedback,
    pub is_correct: bool,
}
