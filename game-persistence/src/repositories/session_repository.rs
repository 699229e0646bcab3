use anyhow::Result;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DatabaseConnection, EntityTrait};
use tracing::warn;

use crate::entities::{prelude::*, sessions};
use game_types::{GuessAttempt, Session, SessionStatus};

pub struct SessionRepository {
    db: DatabaseConnection,
}

impl SessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Convert a stored row, treating anything unreadable as no session at all
    fn model_to_session(model: sessions::Model) -> Option<Session> {
        let status = match model.status.parse::<SessionStatus>() {
            Ok(status) => status,
            Err(e) => {
                warn!("Ignoring stored session for {}: {}", model.user_id, e);
                return None;
            }
        };

        let attempts: Vec<GuessAttempt> = match serde_json::from_str(&model.attempts) {
            Ok(attempts) => attempts,
            Err(e) => {
                warn!("Ignoring stored session for {}: bad attempts ({})", model.user_id, e);
                return None;
            }
        };

        Some(Session {
            user_id: model.user_id,
            played_on: model.played_on,
            target_name: model.target_name,
            status,
            attempts,
        })
    }

    pub async fn find_by_user(&self, user_id: &str) -> Result<Option<Session>> {
        let model = Sessions::find_by_id(user_id.to_string()).one(&self.db).await?;
        Ok(model.and_then(Self::model_to_session))
    }

    pub async fn save(&self, session: &Session) -> Result<()> {
        upsert(&self.db, session).await
    }
}

/// Insert or replace the stored session for `session.user_id`
pub(crate) async fn upsert<C: ConnectionTrait>(conn: &C, session: &Session) -> Result<()> {
    let model = sessions::ActiveModel {
        user_id: ActiveValue::Set(session.user_id.clone()),
        played_on: ActiveValue::Set(session.played_on.clone()),
        target_name: ActiveValue::Set(session.target_name.clone()),
        status: ActiveValue::Set(session.status.as_str().to_string()),
        attempts: ActiveValue::Set(serde_json::to_string(&session.attempts)?),
        updated_at: ActiveValue::Set(chrono::Utc::now().into()),
    };

    Sessions::insert(model)
        .on_conflict(
            OnConflict::column(sessions::Column::UserId)
                .update_columns([
                    sessions::Column::PlayedOn,
                    sessions::Column::TargetName,
                    sessions::Column::Status,
                    sessions::Column::Attempts,
                    sessions::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    Ok(())
}
