use anyhow::{Context, Result};
use game_types::Player;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// Default number of autocomplete suggestions
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// The reference list of guessable players
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
    by_name: HashMap<String, usize>,
}

impl Roster {
    /// Build a roster, skipping blank names and later duplicates of a name
    pub fn new(players: Vec<Player>) -> Self {
        let mut roster = Self::default();

        for player in players {
            let key = player.key();
            if key.is_empty() {
                warn!("Skipping roster entry with a blank name");
                continue;
            }
            if roster.by_name.contains_key(&key) {
                warn!("Skipping duplicate roster entry: {}", player.name);
                continue;
            }

            roster.by_name.insert(key, roster.players.len());
            roster.players.push(player);
        }

        roster
    }

    /// Parse a roster from a JSON array of players
    pub fn from_json(json: &str) -> Result<Self> {
        let players: Vec<Player> =
            serde_json::from_str(json).context("Roster is not a JSON array of players")?;
        Ok(Self::new(players))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read roster file {}", path.display()))?;

        let roster = Self::from_json(&json)?;
        info!("Loaded {} players from {}", roster.len(), path.display());
        Ok(roster)
    }

    /// Look up a player by name, ignoring case and surrounding whitespace
    pub fn find(&self, name: &str) -> Option<&Player> {
        self.by_name
            .get(&name.trim().to_lowercase())
            .map(|&index| &self.players[index])
    }

    /// Players whose name contains the query, in roster order
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&Player> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.players
            .iter()
            .filter(|player| player.name.to_lowercase().contains(&query))
            .take(limit)
            .collect()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROSTER_JSON: &str = r#"[
        {"name": "Larry Bird", "position": "Forward", "number": 33, "height": "6'9", "debut": 1979, "allStarAppearances": 12},
        {"name": "Bill Russell", "position": "Center", "number": 6, "height": "6'10", "debut": 1956, "allStarAppearances": 12},
        {"name": "Bob Cousy", "position": "Guard", "number": 14, "height": "6'1", "debut": 1950, "allStarAppearances": 13},
        {"name": "larry bird", "position": "Guard", "number": 1, "height": "6'0", "debut": 2000, "allStarAppearances": 0},
        {"name": "   ", "position": "Guard", "number": 2, "height": "6'0", "debut": 2000, "allStarAppearances": 0}
    ]"#;

    #[test]
    fn test_from_json_skips_duplicates_and_blanks() {
        let roster = Roster::from_json(ROSTER_JSON).unwrap();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.find("Larry Bird").unwrap().number, 33);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let roster = Roster::from_json(ROSTER_JSON).unwrap();
        assert!(roster.find("BILL RUSSELL").is_some());
        assert!(roster.find("  bob cousy ").is_some());
        assert!(roster.find("Michael Jordan").is_none());
        assert!(roster.find("").is_none());
    }

    #[test]
    fn test_suggestions() {
        let roster = Roster::from_json(ROSTER_JSON).unwrap();

        let names: Vec<_> = roster.suggest("b", 5).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Larry Bird", "Bill Russell", "Bob Cousy"]);

        let limited = roster.suggest("b", 2);
        assert_eq!(limited.len(), 2);

        let russ: Vec<_> = roster.suggest("RUSS", 5).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(russ, vec!["Bill Russell"]);

        assert!(roster.suggest("", 5).is_empty());
        assert!(roster.suggest("zzz", 5).is_empty());
    }

    #[test]
    fn test_invalid_json() {
        let result = Roster::from_json("not json");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("JSON array of players"));
    }

    #[test]
    fn test_missing_file() {
        let result = Roster::from_file("/definitely/not/here/players.json");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read roster file"));
    }
}
