#![allow(dead_code)]

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::NaiveDate;
use game_core::{DailyTarget, GameStore, MemoryStore, Roster, TargetProvider};
use game_server::session_manager::SessionManager;
use game_types::{GameError, Player, Session, Stats};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::Notify;

pub const USER: &str = "7b0f2a51-3c1e-4f4e-9c55-0d8c2a3e9f10";

pub fn create_player(
    name: &str,
    position: &str,
    number: i32,
    height: &str,
    debut: i32,
    all_star_appearances: i32,
) -> Player {
    Player {
        name: name.to_string(),
        position: position.to_string(),
        number,
        height: height.to_string(),
        debut,
        all_star_appearances,
    }
}

pub fn bird() -> Player {
    create_player("Larry Bird", "Forward", 33, "6'9", 1979, 12)
}

/// Creates a test roster with known players for predictable testing
pub fn create_test_roster() -> Roster {
    Roster::new(vec![
        bird(),
        create_player("Kevin McHale", "Forward/Center", 32, "6'10", 1980, 7),
        create_player("Bob Cousy", "Guard", 14, "6'1", 1950, 13),
        create_player("Paul Pierce", "Forward", 34, "6'7", 1998, 10),
        create_player("Ray Allen", "Guard", 20, "6'5", 2007, 10),
        create_player("Rajon Rondo", "Guard", 9, "6'1", 2006, 4),
        create_player("Robert Parish", "Center", 0, "7'0", 1980, 9),
        create_player("Bill Russell", "Center", 6, "6'10", 1956, 12),
        create_player("Dave Cowens", "Center", 18, "6'9", 1970, 8),
        create_player("John Havlicek", "Forward/Guard", 17, "6'5", 1962, 13),
    ])
}

/// Eight wrong guesses for a Larry Bird day
pub const MISSES: [&str; 8] = [
    "Kevin McHale",
    "Bob Cousy",
    "Paul Pierce",
    "Ray Allen",
    "Rajon Rondo",
    "Robert Parish",
    "Bill Russell",
    "Dave Cowens",
];

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Provider that always answers with the same player and counts its calls
pub struct CountingProvider {
    player: Player,
    pub calls: AtomicUsize,
}

impl CountingProvider {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TargetProvider for CountingProvider {
    async fn daily_target(&self, date: NaiveDate) -> Result<DailyTarget, GameError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(DailyTarget {
            player: self.player.clone(),
            date,
        })
    }
}

/// Provider that is always down
pub struct UnavailableProvider;

#[async_trait]
impl TargetProvider for UnavailableProvider {
    async fn daily_target(&self, _date: NaiveDate) -> Result<DailyTarget, GameError> {
        Err(GameError::TargetUnavailable {
            message: "connection refused".to_string(),
        })
    }
}

/// Memory store whose writes can be made to fail, and whose next
/// `load_session` can be held until released
#[derive(Default)]
pub struct ControlledStore {
    inner: MemoryStore,
    pub fail_writes: AtomicBool,
    pub fail_stats_writes: AtomicBool,
    gated: AtomicBool,
    pub entered: Notify,
    pub release: Notify,
}

impl ControlledStore {
    /// Hold the next `load_session` call until `release` is notified
    pub fn gate_next_load(&self) {
        self.gated.store(true, Ordering::SeqCst);
    }

    fn check_writes(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("disk full"));
        }
        Ok(())
    }

    fn check_stats_writes(&self) -> Result<()> {
        self.check_writes()?;
        if self.fail_stats_writes.load(Ordering::SeqCst) {
            return Err(anyhow!("stats table locked"));
        }
        Ok(())
    }
}

#[async_trait]
impl GameStore for ControlledStore {
    async fn load_session(&self, user_id: &str) -> Result<Option<Session>> {
        if self.gated.swap(false, Ordering::SeqCst) {
            self.entered.notify_one();
            self.release.notified().await;
        }
        self.inner.load_session(user_id).await
    }

    async fn save_session(&self, session: &Session) -> Result<()> {
        self.check_writes()?;
        self.inner.save_session(session).await
    }

    async fn load_stats(&self, user_id: &str) -> Result<Stats> {
        self.inner.load_stats(user_id).await
    }

    async fn save_stats(&self, user_id: &str, stats: &Stats) -> Result<()> {
        self.check_stats_writes()?;
        self.inner.save_stats(user_id, stats).await
    }

    async fn save_outcome(&self, session: &Session, stats: &Stats) -> Result<()> {
        self.check_writes()?;
        self.check_stats_writes()?;
        self.inner.save_outcome(session, stats).await
    }
}

/// Test setup that provides all necessary components
pub struct TestServerSetup {
    pub session_manager: Arc<SessionManager>,
    pub store: Arc<ControlledStore>,
    pub provider: Arc<CountingProvider>,
}

impl TestServerSetup {
    /// Larry Bird is the answer every day
    pub fn new() -> Self {
        let store = Arc::new(ControlledStore::default());
        let provider = Arc::new(CountingProvider::new(bird()));
        let session_manager = Arc::new(SessionManager::new(
            Arc::new(create_test_roster()),
            provider.clone(),
            store.clone(),
        ));

        Self {
            session_manager,
            store,
            provider,
        }
    }

    pub async fn saved_session(&self) -> Option<Session> {
        self.store.load_session(USER).await.unwrap()
    }

    pub async fn saved_stats(&self) -> Stats {
        self.store.load_stats(USER).await.unwrap()
    }
}
