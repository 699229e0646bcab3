use anyhow::{Result, anyhow};
use async_trait::async_trait;
use game_types::{Session, Stats};
use std::collections::HashMap;
use std::sync::RwLock;

/// Persistence for per-user sessions and statistics
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn load_session(&self, user_id: &str) -> Result<Option<Session>>;

    async fn save_session(&self, session: &Session) -> Result<()>;

    /// Statistics for a user; zeroed when nothing has been stored yet
    async fn load_stats(&self, user_id: &str) -> Result<Stats>;

    async fn save_stats(&self, user_id: &str, stats: &Stats) -> Result<()>;

    /// Save a finished session together with its updated statistics.
    ///
    /// Must be all-or-nothing: on error neither the session nor the stats
    /// may have changed.
    async fn save_outcome(&self, session: &Session, stats: &Stats) -> Result<()>;
}

/// In-process store, mainly for tests and local play
#[derive(Debug, Default)]
pub struct MemoryStore {
    sessions: RwLock<HashMap<String, Session>>,
    stats: RwLock<HashMap<String, Stats>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn load_session(&self, user_id: &str) -> Result<Option<Session>> {
        let sessions = self.sessions.read().map_err(|_| anyhow!("Session store poisoned"))?;
        Ok(sessions.get(user_id).cloned())
    }

    async fn save_session(&self, session: &Session) -> Result<()> {
        let mut sessions = self.sessions.write().map_err(|_| anyhow!("Session store poisoned"))?;
        sessions.insert(session.user_id.clone(), session.clone());
        Ok(())
    }

    async fn load_stats(&self, user_id: &str) -> Result<Stats> {
        let stats = self.stats.read().map_err(|_| anyhow!("Stats store poisoned"))?;
        Ok(stats.get(user_id).cloned().unwrap_or_default())
    }

    async fn save_stats(&self, user_id: &str, stats: &Stats) -> Result<()> {
        let mut all_stats = self.stats.write().map_err(|_| anyhow!("Stats store poisoned"))?;
        all_stats.insert(user_id.to_string(), stats.clone());
        Ok(())
    }

    async fn save_outcome(&self, session: &Session, stats: &Stats) -> Result<()> {
        let mut sessions = self.sessions.write().map_err(|_| anyhow!("Session store poisoned"))?;
        let mut all_stats = self.stats.write().map_err(|_| anyhow!("Stats store poisoned"))?;
        sessions.insert(session.user_id.clone(), session.clone());
        all_stats.insert(session.user_id.clone(), stats.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_sessions() {
        let store = MemoryStore::new();
        assert!(store.load_session("user-1").await.unwrap().is_none());

        let session = Session::new("user-1", "2024-01-02");
        store.save_session(&session).await.unwrap();
        assert_eq!(store.load_session("user-1").await.unwrap(), Some(session));
        assert!(store.load_session("user-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memory_store_stats() {
        let store = MemoryStore::new();
        assert_eq!(store.load_stats("user-1").await.unwrap(), Stats::default());

        let stats = Stats {
            games_played: 3,
            wins: 2,
            guess_distribution: vec![0, 1, 1, 0, 0, 0, 0, 0],
        };
        store.save_stats("user-1", &stats).await.unwrap();
        assert_eq!(store.load_stats("user-1").await.unwrap(), stats);
    }

    #[tokio::test]
    async fn test_save_outcome_writes_both() {
        let store = MemoryStore::new();
        let session = Session::new("user-1", "2024-01-02");
        let stats = Stats {
            games_played: 1,
            ..Stats::default()
        };

        store.save_outcome(&session, &stats).await.unwrap();
        assert!(store.load_session("user-1").await.unwrap().is_some());
        assert_eq!(store.load_stats("user-1").await.unwrap().games_played, 1);
    }
}
