pub mod prelude;

pub mod player_stats;
pub mod sessions;
