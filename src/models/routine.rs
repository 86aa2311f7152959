use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A single availability entry within a trainee's routine.
///
/// Times are free-form strings ("08:00"); the server treats them as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

/// A trainee's weekly routine. The availability collection is stored as a
/// JSONB array, ordered exactly as the caller submitted it.
#[derive(Debug, Clone, FromRow)]
pub struct Routine {
    pub id: Uuid,
    pub trainee_id: Uuid,
    pub availability: Json<Vec<TimeSlot>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
