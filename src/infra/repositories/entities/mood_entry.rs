//! Mood entry database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::{MoodLevel, NewMoodEntry};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mood_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub mood: MoodLevel,
    pub intensity: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub note: Option<String>,
    pub triggers: Vec<String>,
    pub activities: Vec<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<NewMoodEntry> for ActiveModel {
    fn from(entry: NewMoodEntry) -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            user_id: Set(entry.user_id),
            mood: Set(entry.mood),
            intensity: Set(entry.intensity),
            note: Set(entry.note),
            triggers: Set(entry.triggers),
            activities: Set(entry.activities),
            created_at: NotSet,
        }
    }
}
