use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A guessable player from the reference roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Player {
    pub name: String,
    pub position: String, // e.g. "Guard/Forward"
    pub number: i32,
    pub height: String, // feet'inches, e.g. "6'9"
    pub debut: i32,     // year of first appearance
    pub all_star_appearances: i32,
}

impl Player {
    /// Case-insensitive lookup key for this player
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.key() == name.trim().to_lowercase()
    }
}
