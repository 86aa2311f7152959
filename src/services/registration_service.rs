use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::models::{
    CreateRegistration, Registration, UpdateRegistration, DEFAULT_REGISTRATION_STATUS,
};

const REGISTRATION_COLUMNS: &str =
    "id, event_id, trainee_id, invitee_email, start_time, end_time, status, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct RegistrationService {
    db: PgPool,
}

impl RegistrationService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create(&self, data: CreateRegistration) -> Result<Registration, ServiceError> {
        let now = Utc::now();

        let registration = sqlx::query_as::<_, Registration>(
            "INSERT INTO registrations
                 (id, event_id, trainee_id, invitee_email, start_time, end_time, status,
                  created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
             RETURNING id, event_id, trainee_id, invitee_email, start_time, end_time, status,
                       created_at, updated_at",
        )
        .bind(Uuid::new_v4())
        .bind(&data.event_id)
        .bind(data.trainee_id)
        .bind(&data.invitee_email)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(data.status.as_deref().unwrap_or(DEFAULT_REGISTRATION_STATUS))
        .bind(now)
        .fetch_one(&self.db)
        .await?;

        Ok(registration)
    }

    pub async fn get(&self, id: Uuid) -> Result<Registration, ServiceError> {
        sqlx::query_as::<_, Registration>(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(ServiceError::NotFound("registration"))
    }

    /// Sparse patch; absent fields keep their stored value.
    pub async fn update(
        &self,
        id: Uuid,
        data: UpdateRegistration,
    ) -> Result<Registration, ServiceError> {
        sqlx::query_as::<_, Registration>(
            "UPDATE registrations
             SET event_id = COALESCE($2, event_id),
                 invitee_email = COALESCE($3, invitee_email),
                 start_time = COALESCE($4, start_time),
                 end_time = COALESCE($5, end_time),
                 status = COALESCE($6, status),
                 updated_at = $7
             WHERE id = $1
             RETURNING id, event_id, trainee_id, invitee_email, start_time, end_time, status,
                       created_at, updated_at",
        )
        .bind(id)
        .bind(data.event_id)
        .bind(data.invitee_email)
        .bind(data.start_time)
        .bind(data.end_time)
        .bind(data.status)
        .bind(Utc::now())
        .fetch_optional(&self.db)
        .await?
        .ok_or(ServiceError::NotFound("registration"))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotFound("registration"));
        }
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Registration>, ServiceError> {
        let registrations = sqlx::query_as::<_, Registration>(&format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations ORDER BY created_at, id"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(registrations)
    }
}
