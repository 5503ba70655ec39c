//! User contact persistence.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use super::entities::user_contact::{self, ActiveModel, Entity as UserContactEntity, Model};
use crate::domain::NewUserContact;

/// Contact store over a borrowed connection
pub struct ContactStore<'c, C> {
    conn: &'c C,
}

impl<'c, C> ContactStore<'c, C>
where
    C: ConnectionTrait,
{
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }

    /// Insert a contact. A second contact with the same phone for the same
    /// user violates `uq_user_contacts_user_phone`.
    pub async fn insert(&self, contact: NewUserContact) -> Result<Model, DbErr> {
        UserContactEntity::insert(ActiveModel::from(contact))
            .exec_with_returning(self.conn)
            .await
    }

    pub async fn exists(&self, user_id: Uuid, phone: &str) -> Result<bool, DbErr> {
        let count = UserContactEntity::find()
            .filter(user_contact::Column::UserId.eq(user_id))
            .filter(user_contact::Column::Phone.eq(phone))
            .count(self.conn)
            .await?;

        Ok(count > 0)
    }

    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Model>, DbErr> {
        UserContactEntity::find()
            .filter(user_contact::Column::UserId.eq(user_id))
            .all(self.conn)
            .await
    }
}
