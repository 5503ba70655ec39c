//! Migration: Create the users table and the `user_role` enum.

use sea_orm_migration::prelude::*;

use super::{
    create_enum_if_missing, drop_enum_if_unused, enum_column, timestamp_column, uuid_pk_column,
    USER_ROLE_TYPE, USER_ROLE_VALUES,
};
use crate::config::ROLE_PATIENT;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_enum_if_missing(manager, USER_ROLE_TYPE, USER_ROLE_VALUES).await?;

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(&mut uuid_pk_column(Users::Id))
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    // NULL until the user (or the admin bootstrap) sets one
                    .col(ColumnDef::new(Users::PasswordHash).string().null())
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        enum_column(Users::Role, USER_ROLE_TYPE, USER_ROLE_VALUES)
                            .not_null()
                            .default(ROLE_PATIENT),
                    )
                    .col(&mut timestamp_column(Users::CreatedAt))
                    .col(&mut timestamp_column(Users::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_role")
                    .table(Users::Table)
                    .col(Users::Role)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).if_exists().to_owned())
            .await?;

        drop_enum_if_unused(manager, USER_ROLE_TYPE).await
    }
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
    Email,
    PasswordHash,
    Name,
    Role,
    CreatedAt,
    UpdatedAt,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::db::migrations::test_support::accepting_connection;

    #[tokio::test]
    async fn test_up_twice_only_issues_conditional_ddl() {
        let connection = accepting_connection(6);
        let manager = SchemaManager::new(&connection);

        Migration.up(&manager).await.unwrap();
        Migration.up(&manager).await.unwrap();

        let log = connection.into_transaction_log();
        assert_eq!(log.len(), 6);

        let rendered = format!("{:?}", log);
        assert!(rendered.contains("duplicate_object"));
        assert!(rendered.contains(r#"CREATE TABLE IF NOT EXISTS \"users\""#));
        assert!(rendered.contains(r#"CREATE INDEX IF NOT EXISTS \"idx_users_role\""#));
        assert!(rendered.contains("DEFAULT 'patient'"));
    }

    #[test]
    fn test_migration_name() {
        assert_eq!(Migration.name(), "m20240101_000001_create_users_table");
    }
}
