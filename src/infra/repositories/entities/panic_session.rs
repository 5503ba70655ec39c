//! Panic session database entity for SeaORM.
//!
//! Two links to `users`: the owner cascades, the therapist is set to NULL.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::domain::NewPanicSession;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "panic_sessions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub therapist_id: Option<Uuid>,
    pub started_at: DateTimeUtc,
    pub duration_ms: i64,
    pub breathing_exercise_used: bool,
    pub emergency_contacts_used: Vec<String>,
    pub trigger_method: String,
    pub audio_recordings: Vec<String>,
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
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::TherapistId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    Therapist,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<NewPanicSession> for ActiveModel {
    fn from(session: NewPanicSession) -> Self {
        Self {
            id: Set(Uuid::new_v4()),
            user_id: Set(session.user_id),
            therapist_id: Set(session.therapist_id),
            started_at: Set(session.started_at),
            duration_ms: Set(session.duration_ms),
            breathing_exercise_used: Set(session.breathing_exercise_used),
            emergency_contacts_used: Set(session.emergency_contacts_used),
            trigger_method: Set(session.trigger_method),
            audio_recordings: Set(session.audio_recordings),
            created_at: NotSet,
        }
    }
}
