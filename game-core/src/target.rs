use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use game_types::{GameError, Player};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tracing::debug;

use crate::Roster;

/// Key under which a day's session is stored, e.g. "2024-01-02"
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The answer for one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTarget {
    pub player: Player,
    pub date: NaiveDate,
}

impl DailyTarget {
    pub fn day_key(&self) -> String {
        day_key(self.date)
    }
}

/// Source of the player of the day
#[async_trait]
pub trait TargetProvider: Send + Sync {
    async fn daily_target(&self, date: NaiveDate) -> Result<DailyTarget, GameError>;
}

/// Picks the player of the day from the roster without any remote authority.
///
/// The pick is pseudo-random but seeded by the date, so every caller gets the
/// same player for the same day.
pub struct LocalTargetProvider {
    roster: Arc<Roster>,
    seed: u64,
}

impl LocalTargetProvider {
    pub fn new(roster: Arc<Roster>, seed: u64) -> Self {
        Self { roster, seed }
    }

    pub fn pick(&self, date: NaiveDate) -> Result<&Player, GameError> {
        if self.roster.is_empty() {
            return Err(GameError::TargetUnavailable {
                message: "Roster is empty".to_string(),
            });
        }

        // A given date and seed must pick the same player on every build
        let day = u64::from(date.num_days_from_ce().unsigned_abs());
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ day);
        let index = rng.gen_range(0..self.roster.len());

        Ok(&self.roster.players()[index])
    }
}

#[async_trait]
impl TargetProvider for LocalTargetProvider {
    async fn daily_target(&self, date: NaiveDate) -> Result<DailyTarget, GameError> {
        let player = self.pick(date)?.clone();
        debug!("Local player of the day for {} selected", date);
        Ok(DailyTarget { player, date })
    }
}

/// Always returns the same player; useful for tests and fixed puzzles
pub struct FixedTargetProvider {
    player: Player,
}

impl FixedTargetProvider {
    pub fn new(player: Player) -> Self {
        Self { player }
    }
}

#[async_trait]
impl TargetProvider for FixedTargetProvider {
    async fn daily_target(&self, date: NaiveDate) -> Result<DailyTarget, GameError> {
        Ok(DailyTarget {
            player: self.player.clone(),
            date,
        })
    }
}
