use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Status assigned when the caller does not supply one.
pub const DEFAULT_REGISTRATION_STATUS: &str = "scheduled";

/// A trainee's registration against an external event. `event_id` is an
/// opaque reference and is not validated against anything.
#[derive(Debug, Clone, FromRow)]
pub struct Registration {
    pub id: Uuid,
    pub event_id: String,
    pub trainee_id: Uuid,
    pub invitee_email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateRegistration {
    pub event_id: String,
    pub trainee_id: Uuid,
    pub invitee_email: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

/// Sparse patch: `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct UpdateRegistration {
    pub event_id: Option<String>,
    pub invitee_email: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub status: Option<String>,
}
