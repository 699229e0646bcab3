use chrono::NaiveDate;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use game_core::{
    DailyGame, DailyTarget, GameStore, ResultsFormatter, Roster, StatsAggregator,
    TargetProvider, day_key, generate_user_id, session_for_day,
};
use game_types::{GameError, GuessResponse, SessionView, Stats};

/// Marks a user as having a submission in flight until dropped
struct InFlightGuard<'a> {
    in_flight: &'a DashMap<String, ()>,
    user_id: String,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(in_flight: &'a DashMap<String, ()>, user_id: &str) -> Result<Self, GameError> {
        match in_flight.entry(user_id.to_string()) {
            Entry::Occupied(_) => Err(GameError::SubmissionInProgress),
            Entry::Vacant(entry) => {
                entry.insert(());
                Ok(Self {
                    in_flight,
                    user_id: user_id.to_string(),
                })
            }
        }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.remove(&self.user_id);
    }
}

fn storage_error(err: anyhow::Error) -> GameError {
    error!("Storage failure: {:#}", err);
    GameError::Storage {
        message: err.to_string(),
    }
}

pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// Drives daily sessions for every user against one roster, provider and store
pub struct SessionManager {
    roster: Arc<Roster>,
    provider: Arc<dyn TargetProvider>,
    store: Arc<dyn GameStore>,
    in_flight: DashMap<String, ()>,
    target_cache: RwLock<Option<DailyTarget>>,
    suggestion_limit: usize,
}

impl SessionManager {
    pub fn new(
        roster: Arc<Roster>,
        provider: Arc<dyn TargetProvider>,
        store: Arc<dyn GameStore>,
    ) -> Self {
        Self {
            roster,
            provider,
            store,
            in_flight: DashMap::new(),
            target_cache: RwLock::new(None),
            suggestion_limit: game_core::DEFAULT_SUGGESTION_LIMIT,
        }
    }

    pub fn with_suggestion_limit(mut self, limit: usize) -> Self {
        self.suggestion_limit = limit;
        self
    }

    pub fn new_user(&self) -> String {
        let user_id = generate_user_id();
        info!("Issued new user id {}", user_id);
        user_id
    }

    /// Player of the day, fetched once per date
    async fn target_for(&self, date: NaiveDate) -> Result<DailyTarget, GameError> {
        {
            let cache = self.target_cache.read().await;
            if let Some(target) = cache.as_ref().filter(|target| target.date == date) {
                return Ok(target.clone());
            }
        }

        let target = self.provider.daily_target(date).await.map_err(|e| {
            error!("Could not get player of the day for {}: {}", date, e);
            e
        })?;
        info!("Player of the day for {} loaded", day_key(date));

        *self.target_cache.write().await = Some(target.clone());
        Ok(target)
    }

    async fn open_game(&self, user_id: &str, today: NaiveDate) -> Result<DailyGame, GameError> {
        let saved = self
            .store
            .load_session(user_id)
            .await
            .map_err(storage_error)?;
        let session = session_for_day(saved, user_id, today);
        let target = self.target_for(today).await?;

        Ok(DailyGame::begin(session, target))
    }

    pub async fn session_view(&self, user_id: &str) -> Result<SessionView, GameError> {
        self.session_view_on(user_id, today()).await
    }

    pub async fn session_view_on(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> Result<SessionView, GameError> {
        Ok(self.open_game(user_id, today).await?.view())
    }

    pub async fn submit_guess(&self, user_id: &str, guess: &str) -> Result<GuessResponse, GameError> {
        self.submit_guess_on(user_id, guess, today()).await
    }

    /// Score a guess and persist the result.
    ///
    /// Nothing is written unless the guess is accepted; a terminal guess
    /// stores the session and updated statistics together.
    pub async fn submit_guess_on(
        &self,
        user_id: &str,
        guess: &str,
        today: NaiveDate,
    ) -> Result<GuessResponse, GameError> {
        let _guard = InFlightGuard::acquire(&self.in_flight, user_id)?;

        let mut game = self.open_game(user_id, today).await?;
        let outcome = game.submit_guess(guess, &self.roster).map_err(|e| {
            warn!("Rejected guess {:?} from {}: {}", guess, user_id, e);
            e
        })?;

        match outcome.finished {
            Some(status) => {
                let mut stats = self.store.load_stats(user_id).await.map_err(storage_error)?;
                StatsAggregator::record_result(&mut stats, status, game.session.attempts.len())?;
                self.store
                    .save_outcome(&game.session, &stats)
                    .await
                    .map_err(storage_error)?;
                info!("{} finished {} with status {}", user_id, game.session.played_on, status);
            }
            None => {
                self.store
                    .save_session(&game.session)
                    .await
                    .map_err(storage_error)?;
            }
        }

        Ok(GuessResponse::new(outcome.attempt, game.view()))
    }

    pub async fn stats(&self, user_id: &str) -> Result<Stats, GameError> {
        self.store.load_stats(user_id).await.map_err(storage_error)
    }

    pub async fn share_text(&self, user_id: &str) -> Result<String, GameError> {
        self.share_text_on(user_id, today()).await
    }

    /// Share grid for the given day; just the header when nothing was played
    pub async fn share_text_on(&self, user_id: &str, today: NaiveDate) -> Result<String, GameError> {
        let game = self.open_game(user_id, today).await?;
        Ok(ResultsFormatter::share_text(&game.session.attempts))
    }

    /// Autocomplete names, capped at the configured limit
    pub fn suggest(&self, query: &str, limit: Option<usize>) -> Vec<String> {
        let limit = limit.map_or(self.suggestion_limit, |l| l.min(self.suggestion_limit));
        self.roster
            .suggest(query, limit)
            .into_iter()
            .map(|player| player.name.clone())
            .collect()
    }
}
