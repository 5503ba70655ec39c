//! Seed: sample mood entries for the sample patient.

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use sea_orm_migration::prelude::*;
use validator::Validate;

use super::{rejected, sample_patient_id, sample_patient_ids};
use crate::domain::{MoodLevel, NewMoodEntry};
use crate::infra::repositories::entities::mood_entry::{self, ActiveModel};
use crate::infra::repositories::entities::MoodEntryEntity;

#[derive(DeriveMigrationName)]
pub struct SeedMoodEntries;

fn sample_entries(user_id: uuid::Uuid) -> Vec<NewMoodEntry> {
    vec![
        NewMoodEntry::new(user_id, MoodLevel::Neutral, 5)
            .note("Busy day, managed to take a short walk")
            .triggers(["work", "deadlines"])
            .activities(["walk"]),
        NewMoodEntry::new(user_id, MoodLevel::Good, 7).activities(["music", "breathing"]),
        NewMoodEntry::new(user_id, MoodLevel::Low, 3)
            .note("Slept badly")
            .triggers(["poor sleep"]),
    ]
}

#[async_trait::async_trait]
impl MigrationTrait for SeedMoodEntries {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        let user_id = sample_patient_id(conn).await?;

        let existing = MoodEntryEntity::find()
            .filter(mood_entry::Column::UserId.eq(user_id))
            .count(conn)
            .await?;
        if existing > 0 {
            tracing::debug!(existing, "Mood entries already seeded");
            return Ok(());
        }

        let entries = sample_entries(user_id);
        for entry in &entries {
            entry.validate().map_err(rejected)?;
        }

        let count = entries.len();
        MoodEntryEntity::insert_many(entries.into_iter().map(ActiveModel::from))
            .exec_without_returning(conn)
            .await?;

        tracing::info!(count, "Seeded mood entries");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_table("mood_entries").await? {
            return Ok(());
        }

        MoodEntryEntity::delete_many()
            .filter(mood_entry::Column::UserId.in_subquery(sample_patient_ids()))
            .exec(manager.get_connection())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::MockExecResult;
    use uuid::Uuid;

    use super::*;
    use crate::config::SAMPLE_PATIENT_EMAIL;
    use crate::domain::UserRole;
    use crate::infra::db::seeds::test_support::{count_row, postgres, table_row, user_row};
    use crate::infra::repositories::entities::UserModel;

    #[test]
    fn test_sample_entries_are_valid() {
        for entry in sample_entries(Uuid::new_v4()) {
            assert!(entry.validate().is_ok());
        }
    }

    #[tokio::test]
    async fn test_seeds_when_patient_has_no_entries() {
        let patient = user_row(Uuid::new_v4(), SAMPLE_PATIENT_EMAIL, UserRole::Patient);
        let connection = postgres()
            .append_query_results([vec![patient]])
            .append_query_results([vec![count_row(0)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 3,
            }])
            .into_connection();

        SeedMoodEntries
            .up(&SchemaManager::new(&connection))
            .await
            .unwrap();

        let log = connection.into_transaction_log();
        assert_eq!(log.len(), 3);
        assert!(format!("{:?}", log[2]).contains(r#"INSERT INTO \"mood_entries\""#));
    }

    #[tokio::test]
    async fn test_skips_when_entries_exist() {
        let patient = user_row(Uuid::new_v4(), SAMPLE_PATIENT_EMAIL, UserRole::Patient);
        let connection = postgres()
            .append_query_results([vec![patient]])
            .append_query_results([vec![count_row(3)]])
            .into_connection();

        SeedMoodEntries
            .up(&SchemaManager::new(&connection))
            .await
            .unwrap();

        assert_eq!(connection.into_transaction_log().len(), 2);
    }

    #[tokio::test]
    async fn test_fails_without_sample_patient() {
        let connection = postgres()
            .append_query_results([Vec::<UserModel>::new()])
            .into_connection();

        let result = SeedMoodEntries.up(&SchemaManager::new(&connection)).await;

        assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    }

    #[tokio::test]
    async fn test_down_deletes_through_patient_subquery() {
        let connection = postgres()
            .append_query_results([vec![table_row(true)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 3,
            }])
            .into_connection();

        SeedMoodEntries
            .down(&SchemaManager::new(&connection))
            .await
            .unwrap();

        let log = connection.into_transaction_log();
        assert_eq!(log.len(), 2);
        let delete = format!("{:?}", log[1]);
        assert!(delete.contains(r#"DELETE FROM \"mood_entries\""#));
        assert!(delete.contains(r#"IN (SELECT \"id\" FROM \"users\""#));
        assert!(delete.contains(SAMPLE_PATIENT_EMAIL));
        assert!(!delete.contains("profile_image"));
    }
}
