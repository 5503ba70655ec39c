//! Music session types.

use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::MoodLevel;

/// Mood-music genres (`music_category`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "music_category")]
#[serde(rename_all = "snake_case")]
pub enum MusicCategory {
    #[sea_orm(string_value = "calming")]
    Calming,
    #[sea_orm(string_value = "uplifting")]
    Uplifting,
    #[sea_orm(string_value = "focus")]
    Focus,
    #[sea_orm(string_value = "sleep")]
    Sleep,
    #[sea_orm(string_value = "meditation")]
    Meditation,
    #[sea_orm(string_value = "nature")]
    Nature,
}

/// A listening session. Mood before and after are independent.
#[derive(Debug, Clone, Validate)]
pub struct NewMusicSession {
    pub user_id: Uuid,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub artist: Option<String>,
    pub category: MusicCategory,
    #[validate(range(min = 0, message = "duration must not be negative"))]
    pub duration_seconds: i32,
    pub playlist_name: Option<String>,
    pub mood_before: Option<MoodLevel>,
    pub mood_after: Option<MoodLevel>,
    pub track_ref: Option<String>,
}
