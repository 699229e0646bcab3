use game_types::{GameError, MAX_GUESSES, SessionStatus, Stats};
use tracing::info;

pub struct StatsAggregator;

impl StatsAggregator {
    /// Record a win that took `attempts_used` guesses (1-based)
    pub fn record_win(stats: &mut Stats, attempts_used: usize) -> Result<(), GameError> {
        if !(1..=MAX_GUESSES).contains(&attempts_used) {
            return Err(GameError::InvalidAttemptCount {
                attempts: attempts_used,
            });
        }

        stats.guess_distribution.resize(MAX_GUESSES, 0);
        stats.games_played += 1;
        stats.wins += 1;
        stats.guess_distribution[attempts_used - 1] += 1;
        Ok(())
    }

    pub fn record_loss(stats: &mut Stats) {
        stats.games_played += 1;
    }

    /// Apply a finished session to the running totals
    pub fn record_result(
        stats: &mut Stats,
        status: SessionStatus,
        attempts_used: usize,
    ) -> Result<(), GameError> {
        match status {
            SessionStatus::Won => Self::record_win(stats, attempts_used)?,
            SessionStatus::Lost => Self::record_loss(stats),
            SessionStatus::NotStarted | SessionStatus::InProgress => return Ok(()),
        }

        info!(
            "Stats updated: {} wins from {} games",
            stats.wins, stats.games_played
        );
        Ok(())
    }
}
