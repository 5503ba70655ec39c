//! Migration: Create mood entries and the `mood_level` enum.
//!
//! Intensity is a plain integer column; the 1..=10 range is validated by
//! `NewMoodEntry` before insert.

use sea_orm_migration::prelude::*;

use super::{
    create_enum_if_missing, drop_enum_if_unused, enum_column, text_array_column,
    timestamp_column, uuid_pk_column, MOOD_LEVEL_TYPE, MOOD_LEVEL_VALUES,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_enum_if_missing(manager, MOOD_LEVEL_TYPE, MOOD_LEVEL_VALUES).await?;

        manager
            .create_table(
                Table::create()
                    .table(MoodEntries::Table)
                    .if_not_exists()
                    .col(&mut uuid_pk_column(MoodEntries::Id))
                    .col(ColumnDef::new(MoodEntries::UserId).uuid().not_null())
                    .col(
                        enum_column(MoodEntries::Mood, MOOD_LEVEL_TYPE, MOOD_LEVEL_VALUES)
                            .not_null(),
                    )
                    .col(ColumnDef::new(MoodEntries::Intensity).integer().not_null())
                    .col(ColumnDef::new(MoodEntries::Note).text().null())
                    .col(&mut text_array_column(MoodEntries::Triggers))
                    .col(&mut text_array_column(MoodEntries::Activities))
                    .col(&mut timestamp_column(MoodEntries::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mood_entries_user")
                            .from(MoodEntries::Table, MoodEntries::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_mood_entries_user_created")
                    .table(MoodEntries::Table)
                    .col(MoodEntries::UserId)
                    .col(MoodEntries::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MoodEntries::Table).if_exists().to_owned())
            .await?;

        // music_sessions may still use the type
        drop_enum_if_unused(manager, MOOD_LEVEL_TYPE).await
    }
}

#[derive(Iden)]
enum MoodEntries {
    Table,
    Id,
    UserId,
    Mood,
    Intensity,
    Note,
    Triggers,
    Activities,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
