//! Panic/anxiety session types.

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

/// A recorded panic session. The therapist link is optional.
#[derive(Debug, Clone, Validate)]
pub struct NewPanicSession {
    pub user_id: Uuid,
    pub therapist_id: Option<Uuid>,
    pub started_at: DateTime<Utc>,
    #[validate(range(min = 0, message = "duration must not be negative"))]
    pub duration_ms: i64,
    pub breathing_exercise_used: bool,
    pub emergency_contacts_used: Vec<String>,
    #[validate(length(min = 1, message = "trigger method must not be empty"))]
    pub trigger_method: String,
    pub audio_recordings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_method_required() {
        let session = NewPanicSession {
            user_id: Uuid::new_v4(),
            therapist_id: None,
            started_at: Utc::now(),
            duration_ms: 90_000,
            breathing_exercise_used: true,
            emergency_contacts_used: Vec::new(),
            trigger_method: String::new(),
            audio_recordings: Vec::new(),
        };

        assert!(session.validate().is_err());
        assert!(NewPanicSession { trigger_method: "button".into(), ..session }
            .validate()
            .is_ok());
    }
}
