//! User domain entity and related types.

use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::config::{ROLE_ADMIN, ROLE_PATIENT, ROLE_THERAPIST};

/// User roles, stored as the Postgres enum `user_role`
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[sea_orm(string_value = "patient")]
    Patient,
    #[sea_orm(string_value = "therapist")]
    Therapist,
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Patient => ROLE_PATIENT,
            UserRole::Therapist => ROLE_THERAPIST,
            UserRole::Admin => ROLE_ADMIN,
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Patient
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub name: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Input for creating or upserting a user
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    pub role: UserRole,
    pub password_hash: Option<String>,
}

impl NewUser {
    pub fn new(email: impl Into<String>, name: impl Into<String>, role: UserRole) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            role,
            password_hash: None,
        }
    }

    pub fn with_password(mut self, password: crate::domain::Password) -> Self {
        self.password_hash = Some(password.into_string());
        self
    }
}
