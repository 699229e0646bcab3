use chrono::NaiveDate;
use game_types::{
    GameError, GuessAttempt, MAX_GUESSES, Player, Session, SessionStatus, SessionView,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::target::{DailyTarget, day_key};
use crate::{Roster, ScoringEngine};

/// Generate a new per-installation user identifier
pub fn generate_user_id() -> String {
    Uuid::new_v4().to_string()
}

/// Resolve the session to use today from whatever was stored.
///
/// A stored session from another day is discarded and a fresh `NotStarted`
/// session takes its place, whatever state the old one was in.
pub fn session_for_day(saved: Option<Session>, user_id: &str, today: NaiveDate) -> Session {
    let today_key = day_key(today);

    match saved {
        Some(session) if session.played_on == today_key && session.user_id == user_id => session,
        Some(session) => {
            info!(
                "Day rolled over for {} ({} -> {}), starting a new session",
                user_id, session.played_on, today_key
            );
            Session::new(user_id, today_key)
        }
        None => Session::new(user_id, today_key),
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub attempt: GuessAttempt,
    /// Set only on the guess that ended the day (`Won` or `Lost`)
    pub finished: Option<SessionStatus>,
}

/// A user's session for the day paired with the hidden answer
#[derive(Debug, Clone)]
pub struct DailyGame {
    pub session: Session,
    target: DailyTarget, // Hidden from clients until the day is over
}

impl DailyGame {
    /// Attach today's answer to a session, starting it if needed.
    ///
    /// The target is authoritative: a session recorded against a different
    /// player is restarted.
    pub fn begin(mut session: Session, target: DailyTarget) -> Self {
        let target_key = target.day_key();
        if session.played_on != target_key {
            session = Session::new(session.user_id, target_key);
        }

        let mismatched = session
            .target_name
            .as_deref()
            .is_some_and(|name| !target.player.is_named(name));
        if mismatched {
            warn!(
                "Session for {} on {} was played against a different target, restarting",
                session.user_id, session.played_on
            );
            session = Session::new(session.user_id, session.played_on);
        }

        if session.status == SessionStatus::NotStarted {
            session.target_name = Some(target.player.name.clone());
            session.status = SessionStatus::InProgress;
            info!("Started session for {} on {}", session.user_id, session.played_on);
        }

        Self { session, target }
    }

    pub fn target(&self) -> &Player {
        &self.target.player
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status
    }

    pub fn input_enabled(&self) -> bool {
        self.session.input_enabled()
    }

    /// Submit a guess by player name.
    ///
    /// Rejected guesses leave the session untouched.
    pub fn submit_guess(&mut self, name: &str, roster: &Roster) -> Result<GuessOutcome, GameError> {
        if self.session.is_terminal() {
            return Err(GameError::SessionComplete);
        }
        if self.session.attempts.len() >= MAX_GUESSES {
            return Err(GameError::GuessLimitReached);
        }

        let guessed = roster.find(name).ok_or_else(|| {
            warn!("Rejected unknown player guess: {}", name);
            GameError::UnknownPlayer {
                name: name.trim().to_string(),
            }
        })?;

        let feedback = ScoringEngine::score(guessed, &self.target.player);
        let attempt = GuessAttempt {
            ordinal: self.session.attempts.len(),
            player: guessed.clone(),
            feedback,
        };

        let is_correct = attempt.feedback.is_correct;
        self.session.attempts.push(attempt.clone());

        let finished = if is_correct {
            Some(SessionStatus::Won)
        } else if self.session.attempts.len() >= MAX_GUESSES {
            Some(SessionStatus::Lost)
        } else {
            None
        };

        if let Some(status) = finished {
            self.session.status = status;
            info!(
                "Session for {} on {} finished: {} after {} guesses",
                self.session.user_id,
                self.session.played_on,
                status,
                self.session.attempts.len()
            );
        } else {
            self.session.status = SessionStatus::InProgress;
        }

        Ok(GuessOutcome { attempt, finished })
    }

    /// Client-safe view of the session
    pub fn view(&self) -> SessionView {
        SessionView {
            played_on: self.session.played_on.clone(),
            status: self.session.status,
            attempts: self.session.attempts.clone(),
            attempts_remaining: self.session.attempts_remaining(),
            input_enabled: self.session.input_enabled(),
            answer: self
                .session
                .is_terminal()
                .then(|| self.target.player.clone()),
        }
    }
}
