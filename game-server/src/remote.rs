use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::{debug, warn};

use game_core::{DailyTarget, TargetProvider, day_key};
use game_types::{GameError, Player};

/// Fetches the player of the day from an authoritative server.
///
/// Issues `GET {url}?date=YYYY-MM-DD` and expects a player object back.
pub struct RemoteTargetProvider {
    client: Client,
    url: String,
}

impl RemoteTargetProvider {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

fn unavailable(message: impl Into<String>) -> GameError {
    GameError::TargetUnavailable {
        message: message.into(),
    }
}

#[async_trait]
impl TargetProvider for RemoteTargetProvider {
    async fn daily_target(&self, date: NaiveDate) -> Result<DailyTarget, GameError> {
        let key = day_key(date);
        debug!("Fetching player of the day for {} from {}", key, self.url);

        let response = self
            .client
            .get(&self.url)
            .query(&[("date", key.as_str())])
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to reach target provider: {:?}", e);
                unavailable(format!("Provider unreachable: {}", e))
            })?;

        if !response.status().is_success() {
            warn!("Target provider returned status: {}", response.status());
            return Err(unavailable(format!(
                "Provider returned {}",
                response.status()
            )));
        }

        let player: Player = response.json().await.map_err(|e| {
            warn!("Failed to parse target provider response: {:?}", e);
            unavailable("Provider returned an invalid player")
        })?;

        Ok(DailyTarget { player, date })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use warp::Filter;

    fn bird() -> Player {
        Player {
            name: "Larry Bird".to_string(),
            position: "Forward".to_string(),
            number: 33,
            height: "6'9".to_string(),
            debut: 1979,
            all_star_appearances: 12,
        }
    }

    /// Serve `route` on an ephemeral port and return its base url
    fn spawn_server<F>(route: F) -> String
    where
        F: Filter<Error = warp::Rejection> + Clone + Send + Sync + 'static,
        F::Extract: warp::Reply,
    {
        let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        format!("http://{}/daily", addr)
    }

    #[tokio::test]
    async fn test_fetches_player_for_date() {
        let route = warp::path("daily")
            .and(warp::query::<HashMap<String, String>>())
            .map(|query: HashMap<String, String>| {
                assert_eq!(query.get("date").map(String::as_str), Some("2024-03-01"));
                warp::reply::json(&bird())
            });
        let provider = RemoteTargetProvider::new(spawn_server(route));

        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let target = provider.daily_target(date).await.unwrap();
        assert_eq!(target.player, bird());
        assert_eq!(target.date, date);
    }

    #[tokio::test]
    async fn test_error_status_is_unavailable() {
        let route = warp::path("daily").map(|| {
            warp::reply::with_status("down", warp::http::StatusCode::SERVICE_UNAVAILABLE)
        });
        let provider = RemoteTargetProvider::new(spawn_server(route));

        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let result = provider.daily_target(date).await;
        assert!(matches!(result, Err(GameError::TargetUnavailable { .. })));
    }

    #[tokio::test]
    async fn test_bad_body_is_unavailable() {
        let route = warp::path("daily").map(|| "not a player");
        let provider = RemoteTargetProvider::new(spawn_server(route));

        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let result = provider.daily_target(date).await;
        assert_eq!(
            result.unwrap_err(),
            GameError::TargetUnavailable {
                message: "Provider returned an invalid player".to_string()
            }
        );
    }
}
