//! Seed: one sample panic session attended by the sample therapist.

use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use sea_orm_migration::prelude::*;
use validator::Validate;

use super::{rejected, sample_patient_id, sample_patient_ids, sample_therapist_id};
use crate::domain::NewPanicSession;
use crate::infra::repositories::entities::panic_session::{self, ActiveModel};
use crate::infra::repositories::entities::PanicSessionEntity;

#[derive(DeriveMigrationName)]
pub struct SeedPanicSessions;

#[async_trait::async_trait]
impl MigrationTrait for SeedPanicSessions {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        let user_id = sample_patient_id(conn).await?;
        let therapist_id = sample_therapist_id(conn).await?;

        let existing = PanicSessionEntity::find()
            .filter(panic_session::Column::UserId.eq(user_id))
            .count(conn)
            .await?;
        if existing > 0 {
            tracing::debug!(existing, "Panic sessions already seeded");
            return Ok(());
        }

        let session = NewPanicSession {
            user_id,
            therapist_id: Some(therapist_id),
            started_at: Utc::now() - Duration::days(2),
            duration_ms: 240_000,
            breathing_exercise_used: true,
            emergency_contacts_used: vec!["+15550100".into()],
            trigger_method: "button".into(),
            audio_recordings: Vec::new(),
        };
        session.validate().map_err(rejected)?;

        PanicSessionEntity::insert(ActiveModel::from(session))
            .exec_without_returning(conn)
            .await?;

        tracing::info!("Seeded panic session");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_table("panic_sessions").await? {
            return Ok(());
        }

        PanicSessionEntity::delete_many()
            .filter(panic_session::Column::UserId.in_subquery(sample_patient_ids()))
            .exec(manager.get_connection())
            .await?;
        Ok(())
    }
}
