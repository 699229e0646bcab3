use game_types::{Feedback, FieldFeedback, FieldStatus, Player, PositionStatus};
use tracing::debug;

use crate::comparison::{directional_hint, height_to_inches, split_positions};

/// Largest difference that still counts as close for numeric fields
pub const CLOSE_TOLERANCE: i32 = 5;

pub struct ScoringEngine;

impl ScoringEngine {
    /// Score a guessed player against the answer, field by field
    pub fn score(guessed: &Player, target: &Player) -> Feedback {
        let is_correct = guessed.is_named(&target.name);

        let feedback = Feedback {
            name: if is_correct {
                FieldStatus::Correct
            } else {
                FieldStatus::Incorrect
            },
            position: Self::score_position(&guessed.position, &target.position),
            number: Self::score_numeric(guessed.number, target.number),
            height: Self::score_height(&guessed.height, &target.height),
            debut: Self::score_numeric(guessed.debut, target.debut),
            all_star_appearances: Self::score_numeric(
                guessed.all_star_appearances,
                target.all_star_appearances,
            ),
            is_correct,
        };

        debug!("Scored guess {} -> {:?}", guessed.name, feedback);
        feedback
    }

    pub fn score_position(guessed: &str, target: &str) -> PositionStatus {
        let guessed_roles = split_positions(guessed);
        let target_roles = split_positions(target);

        if guessed_roles == target_roles {
            PositionStatus::Correct
        } else if !guessed_roles.is_disjoint(&target_roles) {
            PositionStatus::Partial
        } else {
            PositionStatus::Incorrect
        }
    }

    pub fn score_numeric(guessed: i32, target: i32) -> FieldFeedback {
        FieldFeedback {
            status: Self::closeness(guessed, target),
            hint: Some(directional_hint(guessed, target)),
        }
    }

    pub fn score_height(guessed: &str, target: &str) -> FieldFeedback {
        match (height_to_inches(guessed), height_to_inches(target)) {
            (Some(guessed_inches), Some(target_inches)) => {
                Self::score_numeric(guessed_inches, target_inches)
            }
            _ => {
                // Without inches there is no ordering; only identical labels match
                let status = if guessed.trim() == target.trim() {
                    FieldStatus::Correct
                } else {
                    FieldStatus::Incorrect
                };
                FieldFeedback { status, hint: None }
            }
        }
    }

    fn closeness(guessed: i32, target: i32) -> FieldStatus {
        match (i64::from(guessed) - i64::from(target)).abs() {
            0 => FieldStatus::Correct,
            diff if diff <= i64::from(CLOSE_TOLERANCE) => FieldStatus::Close,
            _ => FieldStatus::Incorrect,
        }
    }
}
