//! Mood tracking types.

use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Mood scale shared by mood entries and music sessions (`mood_level`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "mood_level")]
#[serde(rename_all = "snake_case")]
pub enum MoodLevel {
    #[sea_orm(string_value = "very_low")]
    VeryLow,
    #[sea_orm(string_value = "low")]
    Low,
    #[sea_orm(string_value = "neutral")]
    Neutral,
    #[sea_orm(string_value = "good")]
    Good,
    #[sea_orm(string_value = "excellent")]
    Excellent,
}

/// A mood entry about to be recorded.
///
/// Intensity bounds are checked here, not by the database.
#[derive(Debug, Clone, Validate)]
pub struct NewMoodEntry {
    pub user_id: Uuid,
    pub mood: MoodLevel,
    #[validate(range(min = 1, max = 10, message = "intensity must be between 1 and 10"))]
    pub intensity: i32,
    pub note: Option<String>,
    pub triggers: Vec<String>,
    pub activities: Vec<String>,
}

impl NewMoodEntry {
    pub fn new(user_id: Uuid, mood: MoodLevel, intensity: i32) -> Self {
        Self {
            user_id,
            mood,
            intensity,
            note: None,
            triggers: Vec::new(),
            activities: Vec::new(),
        }
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn triggers<I, S>(mut self, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.triggers = triggers.into_iter().map(Into::into).collect();
        self
    }

    pub fn activities<I, S>(mut self, activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.activities = activities.into_iter().map(Into::into).collect();
        self
    }
}
