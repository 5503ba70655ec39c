//! Migration: Create user contacts, unique per (user, phone).

use sea_orm_migration::prelude::*;

use super::{timestamp_column, uuid_pk_column};
use crate::config::DEFAULT_CONTACT_TYPE;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserContacts::Table)
                    .if_not_exists()
                    .col(&mut uuid_pk_column(UserContacts::Id))
                    .col(ColumnDef::new(UserContacts::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserContacts::Name).string().not_null())
                    .col(ColumnDef::new(UserContacts::Phone).string_len(32).not_null())
                    .col(
                        ColumnDef::new(UserContacts::ContactType)
                            .string()
                            .not_null()
                            .default(DEFAULT_CONTACT_TYPE),
                    )
                    .col(&mut timestamp_column(UserContacts::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_contacts_user")
                            .from(UserContacts::Table, UserContacts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("uq_user_contacts_user_phone")
                            .col(UserContacts::UserId)
                            .col(UserContacts::Phone),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserContacts::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserContacts {
    Table,
    Id,
    UserId,
    Name,
    Phone,
    ContactType,
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
    async fn test_up_declares_unique_user_phone() {
        let connection = accepting_connection(1);

        Migration
            .up(&SchemaManager::new(&connection))
            .await
            .unwrap();

        let rendered = format!("{:?}", connection.into_transaction_log());
        assert!(rendered.contains(r#"CREATE TABLE IF NOT EXISTS \"user_contacts\""#));
        assert!(rendered.contains("uq_user_contacts_user_phone"));
        assert!(rendered.contains("ON DELETE CASCADE"));
        assert!(rendered.contains("DEFAULT 'emergency'"));
    }
}
