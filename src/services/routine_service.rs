use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::models::{Routine, TimeSlot};

const ROUTINE_COLUMNS: &str = "id, trainee_id, availability, created_at, updated_at";

/// Routines are looked up by owning trainee rather than by their own id.
/// When duplicates exist, update and delete operate on the oldest row
/// ("first match"), mirroring the query path's zero-or-more assumption.
#[derive(Debug, Clone)]
pub struct RoutineService {
    db: PgPool,
}

impl RoutineService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        trainee_id: Uuid,
        availability: Vec<TimeSlot>,
    ) -> Result<Routine, ServiceError> {
        let now = Utc::now();

        let routine = sqlx::query_as::<_, Routine>(
            "INSERT INTO routines (id, trainee_id, availability, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $4)
             RETURNING id, trainee_id, availability, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(trainee_id)
        .bind(Json(availability))
        .bind(now)
        .fetch_one(&self.db)
        .await?;

        Ok(routine)
    }

    /// All routines, optionally narrowed to one trainee.
    pub async fn list(&self, trainee_id: Option<Uuid>) -> Result<Vec<Routine>, ServiceError> {
        let routines = sqlx::query_as::<_, Routine>(&format!(
            "SELECT {ROUTINE_COLUMNS} FROM routines
             WHERE $1::uuid IS NULL OR trainee_id = $1
             ORDER BY created_at, id"
        ))
        .bind(trainee_id)
        .fetch_all(&self.db)
        .await?;

        Ok(routines)
    }

    pub async fn get_by_trainee(&self, trainee_id: Uuid) -> Result<Routine, ServiceError> {
        sqlx::query_as::<_, Routine>(&format!(
            "SELECT {ROUTINE_COLUMNS} FROM routines
             WHERE trainee_id = $1
             ORDER BY created_at, id
             LIMIT 1"
        ))
        .bind(trainee_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(ServiceError::NotFound("routine"))
    }

    pub async fn update_by_trainee(
        &self,
        trainee_id: Uuid,
        availability: Vec<TimeSlot>,
    ) -> Result<Routine, ServiceError> {
        sqlx::query_as::<_, Routine>(
            "UPDATE routines
             SET availability = $2, updated_at = $3
             WHERE id = (
                 SELECT id FROM routines
                 WHERE trainee_id = $1
                 ORDER BY created_at, id
                 LIMIT 1
             )
             RETURNING id, trainee_id, availability, created_at, updated_at",
        )
        .bind(trainee_id)
        .bind(Json(availability))
        .bind(Utc::now())
        .fetch_optional(&self.db)
        .await?
        .ok_or(ServiceError::NotFound("routine"))
    }

    pub async fn delete_by_trainee(&self, trainee_id: Uuid) -> Result<(), ServiceError> {
        let result = sqlx::query(
            "DELETE FROM routines
             WHERE id = (
                 SELECT id FROM routines
                 WHERE trainee_id = $1
                 ORDER BY created_at, id
                 LIMIT 1
             )",
        )
        .bind(trainee_id)
        .execute(&self.db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound("routine"));
        }
        Ok(())
    }
}
