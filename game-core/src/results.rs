use game_types::{Feedback, FieldStatus, GuessAttempt, PositionStatus, ScoredField};

pub const GREEN: &str = "🟩";
pub const YELLOW: &str = "🟨";
pub const BLACK: &str = "⬛";

/// Header placed above the grid when sharing
pub const SHARE_HEADER: &str = "Daily RUSSELL:";

pub struct ResultsFormatter;

impl ResultsFormatter {
    /// Render one line of glyphs per attempt
    pub fn format<'a, I>(attempts: I) -> String
    where
        I: IntoIterator<Item = &'a Feedback>,
    {
        attempts
            .into_iter()
            .map(Self::format_row)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Shareable text for a day's attempts, header included
    pub fn share_text(attempts: &[GuessAttempt]) -> String {
        let grid = Self::format(attempts.iter().map(|attempt| &attempt.feedback));
        format!("{}\n{}", SHARE_HEADER, grid)
    }

    pub fn format_row(feedback: &Feedback) -> String {
        ScoredField::ALL
            .iter()
            .map(|&field| Self::glyph(feedback, field))
            .collect()
    }

    pub fn glyph(feedback: &Feedback, field: ScoredField) -> &'static str {
        match field {
            ScoredField::Name => Self::status_glyph(feedback.name),
            ScoredField::Position => match feedback.position {
                PositionStatus::Correct => GREEN,
                PositionStatus::Partial => YELLOW,
                PositionStatus::Incorrect => BLACK,
            },
            ScoredField::Number => Self::status_glyph(feedback.number.status),
            ScoredField::Height => Self::status_glyph(feedback.height.status),
            ScoredField::Debut => Self::status_glyph(feedback.debut.status),
            ScoredField::AllStarAppearances => {
                Self::status_glyph(feedback.all_star_appearances.status)
            }
        }
    }

    fn status_glyph(status: FieldStatus) -> &'static str {
        match status {
            FieldStatus::Correct => GREEN,
            FieldStatus::Close => YELLOW,
            FieldStatus::Incorrect => BLACK,
        }
    }
}
