use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::error::ServiceError;
use crate::models::{CreateTrainee, Trainee, UpdateTrainee};

const TRAINEE_COLUMNS: &str = "id, name, email, password_hash, timezone, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct TraineeService {
    db: PgPool,
}

impl TraineeService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Register a new trainee. The email must be unused.
    pub async fn create(&self, data: CreateTrainee) -> Result<Trainee, ServiceError> {
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(ServiceError::AlreadyExists("trainee email"));
        }

        let password_hash = hash_password(&data.password)?;
        let now = Utc::now();

        let trainee = sqlx::query_as::<_, Trainee>(
            "INSERT INTO trainees (id, name, email, password_hash, timezone, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $6)
             RETURNING id, name, email, password_hash, timezone, created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.email)
        .bind(&password_hash)
        .bind(data.timezone.as_deref().unwrap_or("UTC"))
        .bind(now)
        .fetch_one(&self.db)
        .await?;

        Ok(trainee)
    }

    pub async fn get(&self, id: Uuid) -> Result<Trainee, ServiceError> {
        sqlx::query_as::<_, Trainee>(&format!(
            "SELECT {TRAINEE_COLUMNS} FROM trainees WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(ServiceError::NotFound("trainee"))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Trainee>, ServiceError> {
        let trainee = sqlx::query_as::<_, Trainee>(&format!(
            "SELECT {TRAINEE_COLUMNS} FROM trainees WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.db)
        .await?;

        Ok(trainee)
    }

    /// Sparse patch; absent fields keep their stored value. `updated_at` is
    /// always touched.
    pub async fn update(&self, id: Uuid, data: UpdateTrainee) -> Result<Trainee, ServiceError> {
        sqlx::query_as::<_, Trainee>(
            "UPDATE trainees
             SET name = COALESCE($2, name),
                 email = COALESCE($3, email),
                 timezone = COALESCE($4, timezone),
                 updated_at = $5
             WHERE id = $1
             RETURNING id, name, email, password_hash, timezone, created_at, updated_at",
        )
        .bind(id)
        .bind(data.name)
        .bind(data.email)
        .bind(data.timezone)
        .bind(Utc::now())
        .fetch_optional(&self.db)
        .await?
        .ok_or(ServiceError::NotFound("trainee"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = sqlx::query("DELETE FROM trainees WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound("trainee"));
        }
        Ok(())
    }

    /// One page of trainees in insertion order, plus the total row count.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<Trainee>, i64), ServiceError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trainees")
            .fetch_one(&self.db)
            .await?;

        let trainees = sqlx::query_as::<_, Trainee>(&format!(
            "SELECT {TRAINEE_COLUMNS} FROM trainees ORDER BY created_at, id LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok((trainees, total))
    }
}
