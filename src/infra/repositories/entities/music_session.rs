//! Music session database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::{MoodLevel, MusicCategory, NewMusicSession};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "music_sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub artist: Option<String>,
    pub category: MusicCategory,
    pub duration_seconds: i32,
    pub playlist_name: Option<String>,
    pub mood_before: Option<MoodLevel>,
    pub mood_after: Option<MoodLevel>,
    pub track_ref: Option<String>,
    pub session_at: DateTimeUtc,
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

impl From<NewMusicSession> for ActiveModel {
    fn from(session: NewMusicSession) -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            user_id: Set(session.user_id),
            title: Set(session.title),
            artist: Set(session.artist),
            category: Set(session.category),
            duration_seconds: Set(session.duration_seconds),
            playlist_name: Set(session.playlist_name),
            mood_before: Set(session.mood_before),
            mood_after: Set(session.mood_after),
            track_ref: Set(session.track_ref),
            session_at: NotSet,
        }
    }
}
