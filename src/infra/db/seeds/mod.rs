//! Sample data scripts and the script lists the CLI runs.
//!
//! Seeds share the `MigrationTrait` shape with schema scripts so the same
//! runner drives both. Every seed checks for existing rows before inserting
//! and its `down` removes only the sample rows it owns. A `down` whose table
//! is already gone does nothing, so a failed revert can be run again.

use sea_orm::sea_query::{Query, SelectStatement};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr};
use uuid::Uuid;
use validator::ValidationErrors;

use crate::config::{SAMPLE_PATIENT_EMAIL, SAMPLE_THERAPIST_EMAIL};
use crate::infra::repositories::entities::user;
use crate::infra::repositories::UserStore;

mod admin_upsert;
mod plan;
mod seed_mood_entries;
mod seed_music_sessions;
mod seed_panic_sessions;
mod seed_sample_users;
mod seed_user_contacts;

pub use admin_upsert::AdminUpsert;
pub use plan::{bootstrap, setup, teardown, Feature};
pub use seed_mood_entries::SeedMoodEntries;
pub use seed_music_sessions::SeedMusicSessions;
pub use seed_panic_sessions::SeedPanicSessions;
pub use seed_sample_users::SeedSampleUsers;
pub use seed_user_contacts::SeedUserContacts;

/// Validation failures surface as script errors.
pub(crate) fn rejected(errors: ValidationErrors) -> DbErr {
    DbErr::Custom(format!("invalid sample data: {}", errors))
}

/// Id of a sample user that `seed_sample_users` must already have created.
pub(crate) async fn sample_user_id<C: ConnectionTrait>(
    conn: &C,
    email: &str,
) -> Result<Uuid, DbErr> {
    UserStore::new(conn)
        .find_by_email(email)
        .await?
        .map(|user| user.id)
        .ok_or_else(|| {
            DbErr::RecordNotFound(format!("sample user {} (run seed_sample_users first)", email))
        })
}

pub(crate) async fn sample_patient_id<C: ConnectionTrait>(conn: &C) -> Result<Uuid, DbErr> {
    sample_user_id(conn, SAMPLE_PATIENT_EMAIL).await
}

pub(crate) async fn sample_therapist_id<C: ConnectionTrait>(conn: &C) -> Result<Uuid, DbErr> {
    sample_user_id(conn, SAMPLE_THERAPIST_EMAIL).await
}

/// `SELECT id FROM users WHERE email = <sample patient>`
///
/// Reverts filter through this subquery rather than loading the user row, so
/// they do not depend on every `users` column still being present.
pub(crate) fn sample_patient_ids() -> SelectStatement {
    Query::select()
        .column(user::Column::Id)
        .from(user::Entity)
        .and_where(user::Column::Email.eq(SAMPLE_PATIENT_EMAIL))
        .to_owned()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::BTreeMap;

    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use uuid::Uuid;

    use crate::domain::UserRole;
    use crate::infra::repositories::entities::UserModel;

    pub fn user_row(id: Uuid, email: &str, role: UserRole) -> UserModel {
        UserModel {
            id,
            email: email.to_string(),
            password_hash: None,
            name: "Sample".to_string(),
            role,
            profile_image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Row returned by `PaginatorTrait::count`
    pub fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::from(n))])
    }

    /// Row returned by `SchemaManager::has_table`
    pub fn table_row(present: bool) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("has_table", Value::from(present))])
    }

    pub fn postgres() -> MockDatabase {
        MockDatabase::new(DatabaseBackend::Postgres)
    }
}
