use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Workout {
    pub id: Uuid,
    pub name: String,
    pub duration: i32, // minutes
    pub description: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateWorkout {
    pub name: String,
    pub duration: i32,
    pub description: String,
    pub color: String,
}

/// Sparse patch: `None` means "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkout {
    pub name: Option<String>,
    pub duration: Option<i32>,
    pub description: Option<String>,
    pub color: Option<String>,
}
