//! Storage-level behavior against a real PostgreSQL instance.
//!
//! All tests here are ignored by default; run them with
//! `cargo test -- --ignored` and a reachable `DATABASE_URL`.

mod common;

use chrono::{Duration, Utc};
use gym_registry::auth::TokenAuthenticator;
use gym_registry::auth::password::verify_password;
use gym_registry::error::ServiceError;
use gym_registry::models::{
    CreateRegistration, CreateTrainee, CreateWorkout, TimeSlot, UpdateTrainee, UpdateWorkout,
};
use gym_registry::services::{
    RegistrationService, RoutineService, TraineeService, WorkoutService,
};

use common::{unique_email, TestDatabase};

fn new_trainee(email: &str) -> CreateTrainee {
    CreateTrainee {
        name: "A".into(),
        email: email.into(),
        password: "pw".into(),
        timezone: Some("UTC".into()),
    }
}

fn slot(day: &str) -> TimeSlot {
    TimeSlot {
        day: day.into(),
        start_time: "08:00".into(),
        end_time: "09:00".into(),
    }
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn create_then_get_returns_the_same_trainee() {
    let db = TestDatabase::new().await;
    let trainees = TraineeService::new(db.pool.clone());

    let created = trainees.create(new_trainee(&unique_email("t"))).await.unwrap();
    let fetched = trainees.get(created.id).await.unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, created.name);
    assert_eq!(fetched.email, created.email);
    assert_eq!(fetched.timezone, created.timezone);
    assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn duplicate_email_conflicts_and_writes_nothing() {
    let db = TestDatabase::new().await;
    let trainees = TraineeService::new(db.pool.clone());
    let email = unique_email("dup");

    trainees.create(new_trainee(&email)).await.unwrap();
    let err = trainees.create(new_trainee(&email)).await.unwrap_err();
    assert!(matches!(err, ServiceError::AlreadyExists(_)));

    let (_, total) = trainees.list(50, 0).await.unwrap();
    assert_eq!(total, 1);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn empty_patch_touches_only_updated_at() {
    let db = TestDatabase::new().await;
    let trainees = TraineeService::new(db.pool.clone());

    let created = trainees.create(new_trainee(&unique_email("p"))).await.unwrap();
    let updated = trainees
        .update(created.id, UpdateTrainee::default())
        .await
        .unwrap();

    assert_eq!(updated.name, created.name);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.timezone, created.timezone);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn page_two_of_twelve_returns_records_six_through_ten() {
    let db = TestDatabase::new().await;
    let trainees = TraineeService::new(db.pool.clone());

    let mut emails = Vec::new();
    for i in 0..12 {
        let email = unique_email(&format!("page{i:02}"));
        trainees.create(new_trainee(&email)).await.unwrap();
        emails.push(email);
    }

    // page 2 with page_size 5: limit 5, offset 5
    let (page, total) = trainees.list(5, 5).await.unwrap();

    assert_eq!(total, 12);
    assert_eq!(page.len(), 5);
    let got: Vec<&str> = page.iter().map(|t| t.email.as_str()).collect();
    let expected: Vec<&str> = emails[5..10].iter().map(String::as_str).collect();
    assert_eq!(got, expected);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn workout_sparse_patch_and_delete() {
    let db = TestDatabase::new().await;
    let workouts = WorkoutService::new(db.pool.clone());

    let created = workouts
        .create(CreateWorkout {
            name: "Leg day".into(),
            duration: 45,
            description: "squats".into(),
            color: "#ff0000".into(),
        })
        .await
        .unwrap();

    let updated = workouts
        .update(
            created.id,
            UpdateWorkout {
                duration: Some(60),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.duration, 60);
    assert_eq!(updated.name, "Leg day");
    assert_eq!(updated.color, "#ff0000");

    workouts.delete(created.id).await.unwrap();
    assert!(matches!(
        workouts.get(created.id).await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        workouts.delete(created.id).await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn routine_update_and_delete_hit_the_oldest_match() {
    let db = TestDatabase::new().await;
    let trainees = TraineeService::new(db.pool.clone());
    let routines = RoutineService::new(db.pool.clone());

    let owner = trainees.create(new_trainee(&unique_email("r"))).await.unwrap();
    let first = routines
        .create(owner.id, vec![slot("monday")])
        .await
        .unwrap();
    let second = routines
        .create(owner.id, vec![slot("tuesday")])
        .await
        .unwrap();

    // Update lands on the older of the two rows.
    let updated = routines
        .update_by_trainee(owner.id, vec![slot("friday")])
        .await
        .unwrap();
    assert_eq!(updated.id, first.id);
    assert_eq!(updated.availability.0[0].day, "friday");

    // So does delete; the newer row survives.
    routines.delete_by_trainee(owner.id).await.unwrap();
    let remaining = routines.list(Some(owner.id)).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn registration_status_defaults_to_scheduled() {
    let db = TestDatabase::new().await;
    let trainees = TraineeService::new(db.pool.clone());
    let registrations = RegistrationService::new(db.pool.clone());

    let owner = trainees.create(new_trainee(&unique_email("g"))).await.unwrap();
    let start = Utc::now() + Duration::days(1);

    let created = registrations
        .create(CreateRegistration {
            event_id: "evt-123".into(),
            trainee_id: owner.id,
            invitee_email: "guest@example.com".into(),
            start_time: start,
            end_time: None,
            status: None,
        })
        .await
        .unwrap();

    assert_eq!(created.status, "scheduled");
    assert!(created.end_time.is_none());

    let fetched = registrations.get(created.id).await.unwrap();
    assert_eq!(fetched.event_id, "evt-123");
    assert_eq!(fetched.status, "scheduled");
}

#[tokio::test]
#[ignore = "requires a PostgreSQL server (set DATABASE_URL)"]
async fn session_lifecycle_round_trip() {
    let db = TestDatabase::new().await;
    let trainees = TraineeService::new(db.pool.clone());
    let auth = TokenAuthenticator::new("integration_secret");

    let email = unique_email("s");
    let trainee = trainees.create(new_trainee(&email)).await.unwrap();

    // Login: the stored credential is a hash, never the password itself.
    let stored = trainees.find_by_email(&email).await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "pw");
    assert!(verify_password("pw", &stored.password_hash).unwrap());

    let token = auth.issue(trainee.id, &trainee.email).unwrap();

    // Check: the session resolves back to the trainee.
    let session = auth.authenticate(&token).unwrap();
    assert_eq!(session.trainee_id, trainee.id);
    assert_eq!(trainees.get(session.trainee_id).await.unwrap().email, email);

    // Logout, then the same token is refused.
    auth.revoke(&token);
    assert!(matches!(
        auth.authenticate(&token),
        Err(ServiceError::RevokedToken)
    ));
}
