#![allow(dead_code)]

use chrono::NaiveDate;
use game_core::{DailyGame, DailyTarget, Roster, session_for_day};
use game_types::{Player, Session};

/// Creates a player with the given attributes
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

/// A small roster of known players for predictable testing
pub fn create_test_roster() -> Roster {
    Roster::new(vec![
        create_player("Bill Russell", "Center", 6, "6'10", 1956, 12),
        create_player("Larry Bird", "Forward", 33, "6'9", 1979, 12),
        create_player("Bob Cousy", "Guard", 14, "6'1", 1950, 13),
        create_player("John Havlicek", "Forward/Guard", 17, "6'5", 1962, 13),
        create_player("Kevin McHale", "Forward/Center", 32, "6'10", 1980, 7),
        create_player("Robert Parish", "Center", 0, "7'0", 1980, 9),
        create_player("Paul Pierce", "Forward", 34, "6'7", 1998, 10),
        create_player("Ray Allen", "Guard", 20, "6'5", 2007, 10),
        create_player("Rajon Rondo", "Guard", 9, "6'1", 2006, 4),
        create_player("Jayson Tatum", "Forward", 0, "6'8", 2017, 5),
        create_player("Jaylen Brown", "Guard/Forward", 7, "6'6", 2016, 4),
        create_player("Dave Cowens", "Center", 18, "6'9", 1970, 8),
    ])
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Creates a fresh game for `user_id` on `day` against the named target
pub fn create_game(roster: &Roster, user_id: &str, day: &str, target_name: &str) -> DailyGame {
    let target = DailyTarget {
        player: roster.find(target_name).unwrap().clone(),
        date: date(day),
    };
    DailyGame::begin(session_for_day(None, user_id, date(day)), target)
}

/// Names of roster players that are not the target, in roster order
pub fn wrong_guesses(roster: &Roster, target_name: &str) -> Vec<String> {
    roster
        .players()
        .iter()
        .filter(|p| p.name != target_name)
        .map(|p| p.name.clone())
        .collect()
}

/// Reload a stored session as it would be on `day`
pub fn reload(saved: Session, day: &str) -> Session {
    let user_id = saved.user_id.clone();
    session_for_day(Some(saved), &user_id, date(day))
}
