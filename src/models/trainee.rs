use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// A trainee row. The password hash never leaves the process; the wire
/// mapping drops it.
#[derive(Debug, Clone, FromRow)]
pub struct Trainee {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub timezone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateTrainee {
    pub name: String,
    pub email: String,
    pub password: String,
    pub timezone: Option<String>,
}

/// Sparse patch: `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct UpdateTrainee {
    pub name: Option<String>,
    pub email: Option<String>,
    pub timezone: Option<String>,
}
