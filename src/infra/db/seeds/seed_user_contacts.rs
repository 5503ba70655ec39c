//! Seed: emergency contacts for the sample patient.

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use sea_orm_migration::prelude::*;
use validator::Validate;

use super::{rejected, sample_patient_id, sample_patient_ids};
use crate::domain::NewUserContact;
use crate::infra::repositories::entities::user_contact;
use crate::infra::repositories::entities::UserContactEntity;
use crate::infra::repositories::ContactStore;

const SAMPLE_CONTACTS: &[(&str, &str, &str)] = &[
    ("Jordan Rivera", "+15550100", "emergency"),
    ("Sample Therapist", "+15550199", "therapist"),
];

#[derive(DeriveMigrationName)]
pub struct SeedUserContacts;

#[async_trait::async_trait]
impl MigrationTrait for SeedUserContacts {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        let user_id = sample_patient_id(conn).await?;
        let contacts = ContactStore::new(conn);

        // Checked per phone: (user_id, phone) is unique
        for (name, phone, kind) in SAMPLE_CONTACTS {
            if contacts.exists(user_id, phone).await? {
                continue;
            }

            let contact = NewUserContact::new(user_id, *name, *phone).contact_type(*kind);
            contact.validate().map_err(rejected)?;
            contacts.insert(contact).await?;
            tracing::info!(phone = %phone, "Seeded contact");
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_table("user_contacts").await? {
            return Ok(());
        }

        let phones = SAMPLE_CONTACTS.iter().map(|(_, phone, _)| *phone);
        UserContactEntity::delete_many()
            .filter(user_contact::Column::UserId.in_subquery(sample_patient_ids()))
            .filter(user_contact::Column::Phone.is_in(phones))
            .exec(manager.get_connection())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::MockExecResult;
    use uuid::Uuid;

    use super::*;
    use crate::config::SAMPLE_PATIENT_EMAIL;
    use crate::domain::UserRole;
    use crate::infra::db::seeds::test_support::{count_row, postgres, table_row, user_row};

    #[tokio::test]
    async fn test_only_missing_phones_are_inserted() {
        let patient_id = Uuid::new_v4();
        let inserted = user_contact::Model {
            id: Uuid::new_v4(),
            user_id: patient_id,
            name: "Sample Therapist".into(),
            phone: "+15550199".into(),
            contact_type: "therapist".into(),
            created_at: Utc::now(),
        };
        let connection = postgres()
            .append_query_results([vec![user_row(
                patient_id,
                SAMPLE_PATIENT_EMAIL,
                UserRole::Patient,
            )]])
            .append_query_results([vec![count_row(1)]])
            .append_query_results([vec![count_row(0)]])
            .append_query_results([vec![inserted]])
            .into_connection();

        SeedUserContacts
            .up(&SchemaManager::new(&connection))
            .await
            .unwrap();

        let log = connection.into_transaction_log();
        assert_eq!(log.len(), 4);
        let insert = format!("{:?}", log[3]);
        assert!(insert.contains(r#"INSERT INTO \"user_contacts\""#));
        assert!(insert.contains("+15550199"));
        assert!(!insert.contains("+15550100"));
    }

    #[tokio::test]
    async fn test_down_can_run_twice() {
        let connection = postgres()
            .append_query_results([vec![table_row(true)], vec![table_row(false)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            }])
            .into_connection();
        let manager = SchemaManager::new(&connection);

        SeedUserContacts.down(&manager).await.unwrap();
        SeedUserContacts.down(&manager).await.unwrap();

        let log = connection.into_transaction_log();
        assert_eq!(log.len(), 3);
        let rendered = format!("{:?}", log);
        assert_eq!(rendered.matches("DELETE FROM").count(), 1);
        assert!(rendered.contains("+15550100"));
    }
}
