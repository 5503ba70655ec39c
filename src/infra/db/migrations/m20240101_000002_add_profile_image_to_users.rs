//! Migration: Add `profile_image` to users and backfill the default avatar.

use sea_orm_migration::prelude::*;

use crate::config::DEFAULT_PROFILE_IMAGE;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Users::Table)
                    .add_column_if_not_exists(ColumnDef::new(Users::ProfileImage).string().null())
                    .to_owned(),
            )
            .await?;

        // Rows created before the column existed get the default avatar
        manager
            .exec_stmt(
                Query::update()
                    .table(Users::Table)
                    .value(Users::ProfileImage, DEFAULT_PROFILE_IMAGE)
                    .and_where(Expr::col(Users::ProfileImage).is_null())
                    .to_owned(),
            )
            .await
    }

    /// Safe to repeat: the column, or the whole table, may already be gone.
    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"ALTER TABLE IF EXISTS "users" DROP COLUMN IF EXISTS "profile_image""#,
            )
            .await?;
        Ok(())
    }
}

#[derive(Iden)]
enum Users {
    Table,
    ProfileImage,
}
