pub mod comparison;
pub mod results;
pub mod roster;
pub mod scoring;
pub mod session;
pub mod stats;
pub mod store;
pub mod target;

// Re-export main components
pub use comparison::*;
pub use results::*;
pub use roster::*;
pub use scoring::*;
pub use session::*;
pub use stats::*;
pub use store::*;
pub use target::*;
