//! Application-wide constants
//!
//! Centralized location for magic values and the external naming contract.

// =============================================================================
// Database
// =============================================================================

/// Default host used when `DATABASE_URL` is unset
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default Postgres port
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Default database user
pub const DEFAULT_DB_USER: &str = "postgres";

/// Default database name
pub const DEFAULT_DB_NAME: &str = "calmtunes";

/// Default pool size. Scripts never issue overlapping queries.
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Accepted connection URL schemes
pub const POSTGRES_SCHEMES: &[&str] = &["postgres://", "postgresql://"];

/// Query parameter appended when TLS certificate verification is relaxed
pub const SSL_MODE_RELAXED: &str = "sslmode=require";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Authentication
// =============================================================================

/// Authorization scheme for Basic credentials, matched case-insensitively
pub const BASIC_AUTH_SCHEME: &str = "Basic";

/// Realm advertised in the `WWW-Authenticate` challenge
pub const BASIC_AUTH_REALM: &str = "CalmTunes";

/// Default display name for the bootstrapped administrator
pub const DEFAULT_ADMIN_NAME: &str = "Administrator";

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

// =============================================================================
// User Roles
// =============================================================================

pub const ROLE_PATIENT: &str = "patient";
pub const ROLE_THERAPIST: &str = "therapist";
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Mood tracking
// =============================================================================

/// Lowest accepted mood intensity
pub const MIN_MOOD_INTENSITY: i32 = 1;

/// Highest accepted mood intensity
pub const MAX_MOOD_INTENSITY: i32 = 10;

/// Contact type stored when none is given
pub const DEFAULT_CONTACT_TYPE: &str = "emergency";

/// Avatar written by the profile image backfill
pub const DEFAULT_PROFILE_IMAGE: &str = "/images/avatars/default.png";

// =============================================================================
// Sample data
// =============================================================================

/// Email of the sample patient created by feature setups
pub const SAMPLE_PATIENT_EMAIL: &str = "sample.patient@calmtunes.app";

/// Email of the sample therapist created by feature setups
pub const SAMPLE_THERAPIST_EMAIL: &str = "sample.therapist@calmtunes.app";

/// Tables owned by this repository, inspected when none are named
pub const OWNED_TABLES: &[&str] = &[
    "users",
    "mood_entries",
    "music_sessions",
    "panic_sessions",
    "user_contacts",
];
