//! Migration: Create music sessions and the `music_category` enum.

use sea_orm_migration::prelude::*;

use super::{
    create_enum_if_missing, drop_enum_if_unused, enum_column, timestamp_column, uuid_pk_column,
    MOOD_LEVEL_TYPE, MOOD_LEVEL_VALUES, MUSIC_CATEGORY_TYPE, MUSIC_CATEGORY_VALUES,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Shared with mood_entries, which may not have been set up yet
        create_enum_if_missing(manager, MOOD_LEVEL_TYPE, MOOD_LEVEL_VALUES).await?;
        create_enum_if_missing(manager, MUSIC_CATEGORY_TYPE, MUSIC_CATEGORY_VALUES).await?;

        manager
            .create_table(
                Table::create()
                    .table(MusicSessions::Table)
                    .if_not_exists()
                    .col(&mut uuid_pk_column(MusicSessions::Id))
                    .col(ColumnDef::new(MusicSessions::UserId).uuid().not_null())
                    .col(ColumnDef::new(MusicSessions::Title).string().not_null())
                    .col(ColumnDef::new(MusicSessions::Artist).string().null())
                    .col(
                        enum_column(
                            MusicSessions::Category,
                            MUSIC_CATEGORY_TYPE,
                            MUSIC_CATEGORY_VALUES,
                        )
                        .not_null(),
                    )
                    .col(
                        ColumnDef::new(MusicSessions::DurationSeconds)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(MusicSessions::PlaylistName).string().null())
                    .col(
                        enum_column(MusicSessions::MoodBefore, MOOD_LEVEL_TYPE, MOOD_LEVEL_VALUES)
                            .null(),
                    )
                    .col(
                        enum_column(MusicSessions::MoodAfter, MOOD_LEVEL_TYPE, MOOD_LEVEL_VALUES)
                            .null(),
                    )
                    .col(ColumnDef::new(MusicSessions::TrackRef).string().null())
                    .col(&mut timestamp_column(MusicSessions::SessionAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_music_sessions_user")
                            .from(MusicSessions::Table, MusicSessions::UserId)
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
                    .name("idx_music_sessions_user_session_at")
                    .table(MusicSessions::Table)
                    .col(MusicSessions::UserId)
                    .col(MusicSessions::SessionAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MusicSessions::Table).if_exists().to_owned())
            .await?;

        drop_enum_if_unused(manager, MUSIC_CATEGORY_TYPE).await?;
        drop_enum_if_unused(manager, MOOD_LEVEL_TYPE).await
    }
}

#[derive(Iden)]
enum MusicSessions {
    Table,
    Id,
    UserId,
    Title,
    Artist,
    Category,
    DurationSeconds,
    PlaylistName,
    MoodBefore,
    MoodAfter,
    TrackRef,
    SessionAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
