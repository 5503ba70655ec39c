//! User contact types.

use uuid::Uuid;
use validator::Validate;

use crate::config::DEFAULT_CONTACT_TYPE;

/// A contact belonging to one user. `(user_id, phone)` is unique in storage.
#[derive(Debug, Clone, Validate)]
pub struct NewUserContact {
    pub user_id: Uuid,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, max = 32, message = "phone must be 1 to 32 characters"))]
    pub phone: String,
    pub contact_type: String,
}

impl NewUserContact {
    pub fn new(user_id: Uuid, name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
            phone: phone.into(),
            contact_type: DEFAULT_CONTACT_TYPE.to_string(),
        }
    }

    pub fn contact_type(mut self, contact_type: impl Into<String>) -> Self {
        self.contact_type = contact_type.into();
        self
    }
}
