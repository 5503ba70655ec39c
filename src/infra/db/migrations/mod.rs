//! Schema scripts.
//!
//! Each script is a SeaORM migration module. They are executed by
//! `ScriptRunner` in a caller-chosen order rather than through a tracking
//! table, so every `up` must be safe to repeat.
//! Names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm::sea_query::extension::postgres::Type;
use sea_orm::sea_query::PostgresQueryBuilder;
use sea_orm_migration::prelude::*;

pub mod m20240101_000001_create_users_table;
pub mod m20240101_000002_add_profile_image_to_users;
pub mod m20240102_000001_create_user_contacts_table;
pub mod m20240103_000001_create_mood_entries_table;
pub mod m20240104_000001_create_music_sessions_table;
pub mod m20240105_000001_create_panic_sessions_table;

/// Postgres enum for `users.role`
pub const USER_ROLE_TYPE: &str = "user_role";
pub const USER_ROLE_VALUES: &[&str] = &["patient", "therapist", "admin"];

/// Postgres enum shared by mood entries and music sessions
pub const MOOD_LEVEL_TYPE: &str = "mood_level";
pub const MOOD_LEVEL_VALUES: &[&str] = &["very_low", "low", "neutral", "good", "excellent"];

/// Postgres enum for `music_sessions.category`
pub const MUSIC_CATEGORY_TYPE: &str = "music_category";
pub const MUSIC_CATEGORY_VALUES: &[&str] =
    &["calming", "uplifting", "focus", "sleep", "meditation", "nature"];

/// Create a Postgres enum type unless one with that name already exists.
///
/// Postgres has no `CREATE TYPE IF NOT EXISTS`; the duplicate is swallowed
/// inside an anonymous block instead.
pub(crate) async fn create_enum_if_missing(
    manager: &SchemaManager<'_>,
    name: &str,
    values: &[&str],
) -> Result<(), DbErr> {
    let create = Type::create()
        .as_enum(Alias::new(name))
        .values(values.iter().map(|v| Alias::new(*v)))
        .to_owned();

    let sql = format!(
        "DO $$ BEGIN {}; EXCEPTION WHEN duplicate_object THEN NULL; END $$",
        create.to_string(PostgresQueryBuilder)
    );
    manager.get_connection().execute_unprepared(&sql).await?;
    Ok(())
}

/// Drop a Postgres enum type unless a column still uses it.
pub(crate) async fn drop_enum_if_unused(
    manager: &SchemaManager<'_>,
    name: &str,
) -> Result<(), DbErr> {
    let drop = Type::drop().if_exists().name(Alias::new(name)).to_owned();

    let sql = format!(
        "DO $$ BEGIN {}; EXCEPTION WHEN dependent_objects_still_referenced THEN NULL; END $$",
        drop.to_string(PostgresQueryBuilder)
    );
    manager.get_connection().execute_unprepared(&sql).await?;
    Ok(())
}

/// Column definition for an enum-typed column
pub(crate) fn enum_column<T: IntoIden>(column: T, type_name: &str, values: &[&str]) -> ColumnDef {
    ColumnDef::new(column)
        .enumeration(Alias::new(type_name), values.iter().map(|v| Alias::new(*v)))
        .to_owned()
}

/// `text[] NOT NULL DEFAULT '{}'`
pub(crate) fn text_array_column<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .array(ColumnType::Text)
        .not_null()
        .default(Expr::cust("'{}'"))
        .to_owned()
}

/// `timestamptz NOT NULL DEFAULT CURRENT_TIMESTAMP`
pub(crate) fn timestamp_column<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

/// `uuid PRIMARY KEY DEFAULT gen_random_uuid()`
pub(crate) fn uuid_pk_column<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .uuid()
        .not_null()
        .primary_key()
        .default(Expr::cust("gen_random_uuid()"))
        .to_owned()
}
