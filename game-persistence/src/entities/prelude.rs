pub use super::player_stats::Entity as PlayerStats;
pub use super::sessions::Entity as Sessions;
