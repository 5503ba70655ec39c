//! User persistence: lookups, insert-if-absent and the email-keyed upsert.

use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Insert, QueryFilter};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};

/// User store over a borrowed connection
pub struct UserStore<'c, C> {
    conn: &'c C,
}

impl<'c, C> UserStore<'c, C>
where
    C: ConnectionTrait,
{
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let found = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.conn)
            .await?;

        Ok(found.map(User::from))
    }

    /// Return the user with this email, inserting it first if missing.
    ///
    /// An existing row is returned untouched.
    pub async fn ensure(&self, new_user: NewUser) -> Result<User, DbErr> {
        if let Some(existing) = self.find_by_email(&new_user.email).await? {
            tracing::debug!(email = %existing.email, "User already present");
            return Ok(existing);
        }

        let created = UserEntity::insert(new_active_model(new_user))
            .exec_with_returning(self.conn)
            .await?;

        tracing::info!(email = %created.email, role = %created.role, "Created user");
        Ok(created.into())
    }

    /// Insert the user, or update password hash and role when the email exists.
    ///
    /// `created_at` is left alone on conflict; `updated_at` is advanced.
    pub async fn upsert_by_email(&self, new_user: NewUser) -> Result<User, DbErr> {
        let saved = upsert_statement(new_user)
            .exec_with_returning(self.conn)
            .await?;

        Ok(saved.into())
    }

    /// Delete the users with these emails, cascading to their rows.
    pub async fn delete_by_emails(&self, emails: &[&str]) -> Result<u64, DbErr> {
        let result = UserEntity::delete_many()
            .filter(user::Column::Email.is_in(emails.iter().copied()))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Build the `INSERT ... ON CONFLICT (email) DO UPDATE` statement.
pub(crate) fn upsert_statement(new_user: NewUser) -> Insert<ActiveModel> {
    UserEntity::insert(new_active_model(new_user)).on_conflict(
        OnConflict::column(user::Column::Email)
            .update_columns([user::Column::PasswordHash, user::Column::Role])
            .value(user::Column::UpdatedAt, Expr::current_timestamp())
            .to_owned(),
    )
}

fn new_active_model(new_user: NewUser) -> ActiveModel {
    ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(new_user.email),
        password_hash: Set(new_user.password_hash),
        name: Set(new_user.name),
        role: Set(new_user.role),
        profile_image: NotSet,
        created_at: NotSet,
        updated_at: NotSet,
    }
}
