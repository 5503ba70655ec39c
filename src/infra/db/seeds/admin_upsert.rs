//! Admin bootstrap: upsert one admin account keyed on email.

use sea_orm_migration::prelude::*;

use crate::domain::NewUser;
use crate::infra::repositories::UserStore;

/// Inserts the admin, or resets password hash and role on an existing row.
#[derive(DeriveMigrationName)]
pub struct AdminUpsert {
    user: NewUser,
}

impl AdminUpsert {
    /// `user` should already be validated and carry a password hash.
    pub fn new(user: NewUser) -> Self {
        Self { user }
    }
}

#[async_trait::async_trait]
impl MigrationTrait for AdminUpsert {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let saved = UserStore::new(manager.get_connection())
            .upsert_by_email(self.user.clone())
            .await?;

        tracing::info!(email = %saved.email, id = %saved.id, "Admin account ready");
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        Err(DbErr::Migration("admin_upsert cannot be reverted".into()))
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::UserRole;
    use crate::infra::db::seeds::test_support::{postgres, user_row};

    #[tokio::test]
    async fn test_up_issues_single_upsert() {
        let mut user = NewUser::new("root@calmtunes.app", "Root", UserRole::Admin);
        user.password_hash = Some("$argon2id$stub".into());
        let connection = postgres()
            .append_query_results([vec![user_row(
                Uuid::new_v4(),
                "root@calmtunes.app",
                UserRole::Admin,
            )]])
            .into_connection();

        AdminUpsert::new(user)
            .up(&SchemaManager::new(&connection))
            .await
            .unwrap();

        let log = connection.into_transaction_log();
        assert_eq!(log.len(), 1);
        let rendered = format!("{:?}", log[0]);
        assert!(rendered.contains(r#"ON CONFLICT (\"email\") DO UPDATE"#));
        assert!(rendered.contains("RETURNING"));
    }

    #[test]
    fn test_name() {
        let script = AdminUpsert::new(NewUser::new("a@b.co", "A", UserRole::Admin));
        assert_eq!(script.name(), "admin_upsert");
    }
}
