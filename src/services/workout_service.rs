use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::models::{CreateWorkout, UpdateWorkout, Workout};

const WORKOUT_COLUMNS: &str = "id, name, duration, description, color, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct WorkoutService {
    db: PgPool,
}

impl WorkoutService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create(&self, data: CreateWorkout) -> Result<Workout, ServiceError> {
        let now = Utc::now();

        let workout = sqlx::query_as::<_, Workout>(
            "INSERT INTO workouts (id, name, duration, description, color, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING id, name, duration, description, color, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(data.duration)
        .bind(&data.description)
        .bind(&data.color)
        .bind(now)
        .fetch_one(&self.db)
        .await?;

        Ok(workout)
    }

    pub async fn get(&self, id: Uuid) -> Result<Workout, ServiceError> {
        sqlx::query_as::<_, Workout>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(ServiceError::NotFound("workout"))
    }

    /// Sparse patch; absent fields keep their stored value.
    pub async fn update(&self, id: Uuid, data: UpdateWorkout) -> Result<Workout, ServiceError> {
        sqlx::query_as::<_, Workout>(
            "UPDATE workouts
             SET name = COALESCE($2, name),
                 duration = COALESCE($3, duration),
                 description = COALESCE($4, description),
                 color = COALESCE($5, color),
                 updated_at = $6
             WHERE id = $1
             RETURNING id, name, duration, description, color, created_at, updated_at",
        )
        .bind(id)
        .bind(data.name)
        .bind(data.duration)
        .bind(data.description)
        .bind(data.color)
        .bind(Utc::now())
        .fetch_optional(&self.db)
        .await?
        .ok_or(ServiceError::NotFound("workout"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound("workout"));
        }
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Workout>, ServiceError> {
        let workouts = sqlx::query_as::<_, Workout>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts ORDER BY created_at, id"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(workouts)
    }
}
