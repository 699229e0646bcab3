pub mod errors;
pub mod feedback;
pub mod messages;
pub mod player;
pub mod session;
pub mod stats;

/// Number of guesses a player gets each day
pub const MAX_GUESSES: usize = 8;

// Re-export all types
pub use errors::*;
pub use feedback::*;
pub use messages::*;
pub use player::*;
pub use session::*;
pub use stats::*;
