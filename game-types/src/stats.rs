use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::MAX_GUESSES;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Stats {
    pub games_played: u32,
    pub wins: u32,
    pub guess_distribution: Vec<u32>, // index i = wins on guess i + 1
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            games_played: 0,
            wins: 0,
            guess_distribution: vec![0; MAX_GUESSES],
        }
    }
}

impl Stats {
    pub fn win_percentage(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(self.games_played) * 100.0
    }

    /// Pad or truncate the distribution so it has one bucket per allowed guess
    pub fn normalized(mut self) -> Self {
        self.guess_distribution.resize(MAX_GUESSES, 0);
        self
    }
}
