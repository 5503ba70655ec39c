//! Seed: sample patient and therapist accounts.

use sea_orm_migration::prelude::*;
use validator::Validate;

use super::rejected;
use crate::config::{SAMPLE_PATIENT_EMAIL, SAMPLE_THERAPIST_EMAIL};
use crate::domain::{NewUser, UserRole};
use crate::infra::repositories::UserStore;

#[derive(DeriveMigrationName)]
pub struct SeedSampleUsers;

impl SeedSampleUsers {
    fn accounts() -> [NewUser; 2] {
        [
            NewUser::new(SAMPLE_PATIENT_EMAIL, "Sample Patient", UserRole::Patient),
            NewUser::new(SAMPLE_THERAPIST_EMAIL, "Sample Therapist", UserRole::Therapist),
        ]
    }
}

#[async_trait::async_trait]
impl MigrationTrait for SeedSampleUsers {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let users = UserStore::new(manager.get_connection());

        for account in Self::accounts() {
            account.validate().map_err(rejected)?;
            users.ensure(account).await?;
        }
        Ok(())
    }

    /// Removes both accounts; their rows in every child table go with them.
    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_table("users").await? {
            return Ok(());
        }

        let removed = UserStore::new(manager.get_connection())
            .delete_by_emails(&[SAMPLE_PATIENT_EMAIL, SAMPLE_THERAPIST_EMAIL])
            .await?;

        tracing::info!(removed, "Removed sample users");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::MockExecResult;
    use uuid::Uuid;

    use super::*;
    use crate::infra::db::seeds::test_support::{postgres, table_row, user_row};
    use crate::infra::repositories::entities::UserModel;

    #[tokio::test]
    async fn test_existing_accounts_are_left_alone() {
        let connection = postgres()
            .append_query_results([vec![user_row(
                Uuid::new_v4(),
                SAMPLE_PATIENT_EMAIL,
                UserRole::Patient,
            )]])
            .append_query_results([vec![user_row(
                Uuid::new_v4(),
                SAMPLE_THERAPIST_EMAIL,
                UserRole::Therapist,
            )]])
            .into_connection();

        SeedSampleUsers
            .up(&SchemaManager::new(&connection))
            .await
            .unwrap();

        let rendered = format!("{:?}", connection.into_transaction_log());
        assert!(!rendered.contains("INSERT"));
    }

    #[tokio::test]
    async fn test_missing_account_is_inserted() {
        let therapist_id = Uuid::new_v4();
        let connection = postgres()
            .append_query_results([vec![user_row(
                Uuid::new_v4(),
                SAMPLE_PATIENT_EMAIL,
                UserRole::Patient,
            )]])
            .append_query_results([Vec::<UserModel>::new()])
            .append_query_results([vec![user_row(
                therapist_id,
                SAMPLE_THERAPIST_EMAIL,
                UserRole::Therapist,
            )]])
            .into_connection();

        SeedSampleUsers
            .up(&SchemaManager::new(&connection))
            .await
            .unwrap();

        let log = connection.into_transaction_log();
        assert_eq!(log.len(), 3);
        let insert = format!("{:?}", log[2]);
        assert!(insert.contains(r#"INSERT INTO \"users\""#));
        assert!(insert.contains(SAMPLE_THERAPIST_EMAIL));
    }

    #[tokio::test]
    async fn test_down_deletes_only_sample_accounts() {
        let connection = postgres()
            .append_query_results([vec![table_row(true)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            }])
            .into_connection();

        SeedSampleUsers
            .down(&SchemaManager::new(&connection))
            .await
            .unwrap();

        let rendered = format!("{:?}", connection.into_transaction_log());
        assert!(rendered.contains(r#"DELETE FROM \"users\""#));
        assert!(rendered.contains(SAMPLE_PATIENT_EMAIL));
        assert!(rendered.contains(SAMPLE_THERAPIST_EMAIL));
    }
}
