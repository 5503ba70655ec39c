//! Seed: sample music sessions for the sample patient.

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use sea_orm_migration::prelude::*;
use validator::Validate;

use super::{rejected, sample_patient_id, sample_patient_ids};
use crate::domain::{MoodLevel, MusicCategory, NewMusicSession};
use crate::infra::repositories::entities::music_session::{self, ActiveModel};
use crate::infra::repositories::entities::MusicSessionEntity;

#[derive(DeriveMigrationName)]
pub struct SeedMusicSessions;

fn sample_sessions(user_id: uuid::Uuid) -> Vec<NewMusicSession> {
    vec![
        NewMusicSession {
            user_id,
            title: "Evening Rain".into(),
            artist: Some("Calm Collective".into()),
            category: MusicCategory::Nature,
            duration_seconds: 600,
            playlist_name: Some("Wind Down".into()),
            mood_before: Some(MoodLevel::Low),
            mood_after: Some(MoodLevel::Neutral),
            track_ref: Some("calm/nature/evening-rain".into()),
        },
        NewMusicSession {
            user_id,
            title: "Deep Focus".into(),
            artist: None,
            category: MusicCategory::Focus,
            duration_seconds: 1500,
            playlist_name: None,
            mood_before: Some(MoodLevel::Neutral),
            mood_after: None,
            track_ref: None,
        },
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for SeedMusicSessions {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        let user_id = sample_patient_id(conn).await?;

        let existing = MusicSessionEntity::find()
            .filter(music_session::Column::UserId.eq(user_id))
            .count(conn)
            .await?;
        if existing > 0 {
            tracing::debug!(existing, "Music sessions already seeded");
            return Ok(());
        }

        let sessions = sample_sessions(user_id);
        for session in &sessions {
            session.validate().map_err(rejected)?;
        }

        let count = sessions.len();
        MusicSessionEntity::insert_many(sessions.into_iter().map(ActiveModel::from))
            .exec_without_returning(conn)
            .await?;

        tracing::info!(count, "Seeded music sessions");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_table("music_sessions").await? {
            return Ok(());
        }

        MusicSessionEntity::delete_many()
            .filter(music_session::Column::UserId.in_subquery(sample_patient_ids()))
            .exec(manager.get_connection())
            .await?;
        Ok(())
    }
}
