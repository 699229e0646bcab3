pub mod session_repository;
pub mod stats_repository;

pub use session_repository::SessionRepository;
pub use stats_repository::StatsRepository;

use anyhow::Result;
use async_trait::async_trait;
use game_core::GameStore;
use game_types::{Session, Stats};
use sea_orm::{DatabaseConnection, TransactionTrait};

/// `GameStore` backed by the SQL database
pub struct SqlGameStore {
    db: DatabaseConnection,
    sessions: SessionRepository,
    stats: StatsRepository,
}

impl SqlGameStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            sessions: SessionRepository::new(db.clone()),
            stats: StatsRepository::new(db.clone()),
            db,
        }
    }
}

#[async_trait]
impl GameStore for SqlGameStore {
    async fn load_session(&self, user_id: &str) -> Result<Option<Session>> {
        self.sessions.find_by_user(user_id).await
    }

    async fn save_session(&self, session: &Session) -> Result<()> {
        self.sessions.save(session).await
    }

    async fn load_stats(&self, user_id: &str) -> Result<Stats> {
        self.stats.find_by_user(user_id).await
    }

    async fn save_stats(&self, user_id: &str, stats: &Stats) -> Result<()> {
        self.stats.save(user_id, stats).await
    }

    async fn save_outcome(&self, session: &Session, stats: &Stats) -> Result<()> {
        let txn = self.db.begin().await?;
        session_repository::upsert(&txn, session).await?;
        stats_repository::upsert(&txn, &session.user_id, stats).await?;
        txn.commit().await?;
        Ok(())
    }
}
