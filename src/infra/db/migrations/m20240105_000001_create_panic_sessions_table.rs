//! Migration: Create panic sessions.
//!
//! The owning user cascades; the optional therapist is set to NULL when
//! the therapist account is deleted.

use sea_orm_migration::prelude::*;

use super::{text_array_column, timestamp_column, uuid_pk_column};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PanicSessions::Table)
                    .if_not_exists()
                    .col(&mut uuid_pk_column(PanicSessions::Id))
                    .col(ColumnDef::new(PanicSessions::UserId).uuid().not_null())
                    .col(ColumnDef::new(PanicSessions::TherapistId).uuid().null())
                    .col(&mut timestamp_column(PanicSessions::StartedAt))
                    .col(
                        ColumnDef::new(PanicSessions::DurationMs)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(PanicSessions::BreathingExerciseUsed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(&mut text_array_column(PanicSessions::EmergencyContactsUsed))
                    .col(ColumnDef::new(PanicSessions::TriggerMethod).string().not_null())
                    .col(&mut text_array_column(PanicSessions::AudioRecordings))
                    .col(&mut timestamp_column(PanicSessions::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_panic_sessions_user")
                            .from(PanicSessions::Table, PanicSessions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_panic_sessions_therapist")
                            .from(PanicSessions::Table, PanicSessions::TherapistId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_panic_sessions_user")
                    .table(PanicSessions::Table)
                    .col(PanicSessions::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_panic_sessions_therapist")
                    .table(PanicSessions::Table)
                    .col(PanicSessions::TherapistId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PanicSessions::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
enum PanicSessions {
    Table,
    Id,
    UserId,
    TherapistId,
    StartedAt,
    DurationMs,
    BreathingExerciseUsed,
    EmergencyContactsUsed,
    TriggerMethod,
    AudioRecordings,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::db::migrations::test_support::accepting_connection;

    #[tokio::test]
    async fn test_asymmetric_delete_policies() {
        let connection = accepting_connection(3);

        Migration
            .up(&SchemaManager::new(&connection))
            .await
            .unwrap();

        let rendered = format!("{:?}", connection.into_transaction_log());
        assert!(rendered.contains("fk_panic_sessions_user"));
        assert!(rendered.contains("ON DELETE CASCADE"));
        assert!(rendered.contains("fk_panic_sessions_therapist"));
        assert!(rendered.contains("ON DELETE SET NULL"));
    }
}
