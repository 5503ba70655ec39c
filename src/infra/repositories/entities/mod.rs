//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod mood_entry;
pub mod music_session;
pub mod panic_session;
pub mod user;
pub mod user_contact;

pub use mood_entry::Entity as MoodEntryEntity;
pub use music_session::Entity as MusicSessionEntity;
pub use panic_session::Entity as PanicSessionEntity;
pub use user::Model as UserModel;
pub use user_contact::Entity as UserContactEntity;
