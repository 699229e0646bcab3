use anyhow::Result;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DatabaseConnection, EntityTrait};
use tracing::warn;

use crate::entities::{player_stats, prelude::*};
use game_types::Stats;

pub struct StatsRepository {
    db: DatabaseConnection,
}

impl StatsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_stats(model: player_stats::Model) -> Option<Stats> {
        let games_played = u32::try_from(model.games_played).ok()?;
        let wins = u32::try_from(model.wins).ok()?;
        let guess_distribution: Vec<u32> = serde_json::from_str(&model.guess_distribution).ok()?;

        Some(
            Stats {
                games_played,
                wins,
                guess_distribution,
            }
            .normalized(),
        )
    }

    /// Stored statistics, or zeroed stats when absent or unreadable
    pub async fn find_by_user(&self, user_id: &str) -> Result<Stats> {
        let Some(model) = PlayerStats::find_by_id(user_id.to_string())
            .one(&self.db)
            .await?
        else {
            return Ok(Stats::default());
        };

        Ok(Self::model_to_stats(model).unwrap_or_else(|| {
            warn!("Stored stats for {} are malformed, starting from zero", user_id);
            Stats::default()
        }))
    }

    pub async fn save(&self, user_id: &str, stats: &Stats) -> Result<()> {
        upsert(&self.db, user_id, stats).await
    }
}

pub(crate) async fn upsert<C: ConnectionTrait>(conn: &C, user_id: &str, stats: &Stats) -> Result<()> {
    let model = player_stats::ActiveModel {
        user_id: ActiveValue::Set(user_id.to_string()),
        games_played: ActiveValue::Set(i32::try_from(stats.games_played)?),
        wins: ActiveValue::Set(i32::try_from(stats.wins)?),
        guess_distribution: ActiveValue::Set(serde_json::to_string(&stats.guess_distribution)?),
        updated_at: ActiveValue::Set(chrono::Utc::now().into()),
    };

    PlayerStats::insert(model)
        .on_conflict(
            OnConflict::column(player_stats::Column::UserId)
                .update_columns([
                    player_stats::Column::GamesPlayed,
                    player_stats::Column::Wins,
                    player_stats::Column::GuessDistribution,
                    player_stats::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    Ok(())
}
