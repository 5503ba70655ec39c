//! Script lists for each CLI entry point.

use sea_orm_migration::MigrationTrait;

use super::{
    SeedMoodEntries, SeedMusicSessions, SeedPanicSessions, SeedSampleUsers, SeedUserContacts,
};
use crate::infra::db::migrations::{
    m20240101_000001_create_users_table, m20240101_000002_add_profile_image_to_users,
    m20240102_000001_create_user_contacts_table, m20240103_000001_create_mood_entries_table,
    m20240104_000001_create_music_sessions_table, m20240105_000001_create_panic_sessions_table,
};

/// Feature tables that `setup` can create and seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Feature {
    Mood,
    Music,
    Panic,
    Contacts,
}

impl Feature {
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Mood => "mood",
            Feature::Music => "music",
            Feature::Panic => "panic",
            Feature::Contacts => "contacts",
        }
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The users table and its profile image column.
pub fn bootstrap() -> Vec<Box<dyn MigrationTrait>> {
    vec![
        Box::new(m20240101_000001_create_users_table::Migration),
        Box::new(m20240101_000002_add_profile_image_to_users::Migration),
    ]
}

/// Bootstrap, feature table, sample users and the feature's sample rows.
pub fn setup(feature: Feature) -> Vec<Box<dyn MigrationTrait>> {
    let mut scripts = bootstrap();
    scripts.push(feature_table(feature));
    scripts.push(Box::new(SeedSampleUsers));
    scripts.push(feature_seed(feature));
    scripts
}

/// Scripts undone by `setup --revert`, in apply order.
///
/// Sample users and the users table stay; other features may rely on them.
pub fn teardown(feature: Feature) -> Vec<Box<dyn MigrationTrait>> {
    vec![feature_table(feature), feature_seed(feature)]
}

fn feature_table(feature: Feature) -> Box<dyn MigrationTrait> {
    match feature {
        Feature::Mood => Box::new(m20240103_000001_create_mood_entries_table::Migration),
        Feature::Music => Box::new(m20240104_000001_create_music_sessions_table::Migration),
        Feature::Panic => Box::new(m20240105_000001_create_panic_sessions_table::Migration),
        Feature::Contacts => Box::new(m20240102_000001_create_user_contacts_table::Migration),
    }
}

fn feature_seed(feature: Feature) -> Box<dyn MigrationTrait> {
    match feature {
        Feature::Mood => Box::new(SeedMoodEntries),
        Feature::Music => Box::new(SeedMusicSessions),
        Feature::Panic => Box::new(SeedPanicSessions),
        Feature::Contacts => Box::new(SeedUserContacts),
    }
}
