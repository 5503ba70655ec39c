//! Domain layer - Core entities, enumerations and validated inputs
//!
//! Enumerations double as Postgres enum mappings so the closed value sets
//! live in one place. Input types validate before anything touches the
//! database.

pub mod contact;
pub mod mood;
pub mod music;
pub mod panic;
pub mod password;
pub mod user;

pub use contact::NewUserContact;
pub use mood::{MoodLevel, NewMoodEntry};
pub use music::{MusicCategory, NewMusicSession};
pub use panic::NewPanicSession;
pub use password::Password;
pub use user::{NewUser, User, UserRole};
