//! Conversions between wire messages and storage rows.
//!
//! Timestamps cross the wire as `google.protobuf.Timestamp` and round-trip
//! exactly at millisecond granularity; sub-millisecond precision is not
//! preserved. Trainee rows lose their password hash here, unconditionally.

use chrono::{DateTime, Utc};
use prost_types::Timestamp;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::models::{Registration, Routine, TimeSlot, Trainee, Workout};
use crate::proto::gym::v1 as pb;

/// Wire timestamp from a UTC instant, truncated to milliseconds.
///
/// Euclidean div/rem keep pre-1970 instants exact as well.
pub fn datetime_to_timestamp(dt: DateTime<Utc>) -> Timestamp {
    let ms = dt.timestamp_millis();
    Timestamp {
        seconds: ms.div_euclid(1000),
        nanos: (ms.rem_euclid(1000) * 1_000_000) as i32,
    }
}

/// Exact inverse of [`datetime_to_timestamp`] for millisecond-aligned input.
pub fn timestamp_to_datetime(ts: &Timestamp) -> Result<DateTime<Utc>, ServiceError> {
    let ms = ts
        .seconds
        .checked_mul(1000)
        .and_then(|s| s.checked_add(i64::from(ts.nanos) / 1_000_000))
        .ok_or_else(|| ServiceError::InvalidArgument("timestamp out of range".into()))?;

    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| ServiceError::InvalidArgument("timestamp out of range".into()))
}

/// Parse a wire id, naming the offending field on failure.
pub fn parse_id(value: &str, field: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(value)
        .map_err(|_| ServiceError::InvalidArgument(format!("{field} is not a valid id")))
}

/// A trainee as exposed to clients. The password hash stops here.
pub fn trainee_to_profile(trainee: Trainee) -> pb::TraineeProfile {
    pb::TraineeProfile {
        id: trainee.id.to_string(),
        name: trainee.name,
        email: trainee.email,
        timezone: trainee.timezone,
        created_at: Some(datetime_to_timestamp(trainee.created_at)),
        updated_at: Some(datetime_to_timestamp(trainee.updated_at)),
    }
}

pub fn workout_to_proto(workout: Workout) -> pb::Workout {
    pb::Workout {
        id: workout.id.to_string(),
        name: workout.name,
        duration: workout.duration,
        description: workout.description,
        color: workout.color,
        created_at: Some(datetime_to_timestamp(workout.created_at)),
        updated_at: Some(datetime_to_timestamp(workout.updated_at)),
    }
}

pub fn routine_to_proto(routine: Routine) -> pb::Routine {
    pb::Routine {
        id: routine.id.to_string(),
        trainee_id: routine.trainee_id.to_string(),
        availability: slots_to_proto(routine.availability.0),
        created_at: Some(datetime_to_timestamp(routine.created_at)),
        updated_at: Some(datetime_to_timestamp(routine.updated_at)),
    }
}

pub fn registration_to_proto(registration: Registration) -> pb::Registration {
    pb::Registration {
        id: registration.id.to_string(),
        event_id: registration.event_id,
        trainee_id: registration.trainee_id.to_string(),
        invitee_email: registration.invitee_email,
        start_time: Some(datetime_to_timestamp(registration.start_time)),
        end_time: registration.end_time.map(datetime_to_timestamp),
        status: registration.status,
        created_at: Some(datetime_to_timestamp(registration.created_at)),
        updated_at: Some(datetime_to_timestamp(registration.updated_at)),
    }
}

/// Ordering is the caller's; nothing is sorted or deduplicated.
pub fn slots_from_proto(slots: Vec<pb::TimeSlot>) -> Vec<TimeSlot> {
    slots
        .into_iter()
        .map(|slot| TimeSlot {
            day: slot.day,
            start_time: slot.start_time,
            end_time: slot.end_time,
        })
        .collect()
}

pub fn slots_to_proto(slots: Vec<TimeSlot>) -> Vec<pb::TimeSlot> {
    slots
        .into_iter()
        .map(|slot| pb::TimeSlot {
            day: slot.day,
            start_time: slot.start_time,
            end_time: slot.end_time,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn millisecond_timestamps_round_trip_exactly() {
        for ms in [0i64, 1, 999, 1_000, 1_755_000_000_123, -1, -999, -86_400_000] {
            let dt = DateTime::from_timestamp_millis(ms).unwrap();
            let ts = datetime_to_timestamp(dt);
            assert_eq!(timestamp_to_datetime(&ts).unwrap(), dt, "epoch_ms={ms}");
        }
    }

    #[test]
    fn wire_shape_matches_epoch_millis() {
        let dt = DateTime::from_timestamp_millis(1_755_000_000_123).unwrap();
        let ts = datetime_to_timestamp(dt);
        assert_eq!(ts.seconds, 1_755_000_000);
        assert_eq!(ts.nanos, 123_000_000);
    }

    #[test]
    fn negative_instants_keep_nanos_non_negative() {
        // -1ms is one millisecond before the epoch: second -1, 999ms in.
        let dt = DateTime::from_timestamp_millis(-1).unwrap();
        let ts = datetime_to_timestamp(dt);
        assert_eq!(ts.seconds, -1);
        assert_eq!(ts.nanos, 999_000_000);
    }

    #[test]
    fn sub_millisecond_precision_is_dropped() {
        let ts = Timestamp {
            seconds: 10,
            nanos: 123_456_789,
        };
        let dt = timestamp_to_datetime(&ts).unwrap();
        assert_eq!(dt.timestamp_millis(), 10_123);
    }

    #[test]
    fn out_of_range_timestamp_is_invalid_argument() {
        let ts = Timestamp {
            seconds: i64::MAX,
            nanos: 0,
        };
        assert!(matches!(
            timestamp_to_datetime(&ts),
            Err(ServiceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn profile_never_carries_credentials() {
        let trainee = Trainee {
            id: Uuid::new_v4(),
            name: "A".into(),
            email: "a@x.com".into(),
            password_hash: "$2b$12$secret".into(),
            timezone: "UTC".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let profile = trainee_to_profile(trainee);
        let encoded = format!("{profile:?}");
        assert!(!encoded.contains("secret"));
        assert_eq!(profile.email, "a@x.com");
    }

    #[test]
    fn slot_conversion_preserves_order() {
        let wire = vec![
            pb::TimeSlot {
                day: "friday".into(),
                start_time: "17:00".into(),
                end_time: "18:00".into(),
            },
            pb::TimeSlot {
                day: "monday".into(),
                start_time: "08:00".into(),
                end_time: "09:00".into(),
            },
        ];

        let slots = slots_from_proto(wire.clone());
        assert_eq!(slots[0].day, "friday");
        assert_eq!(slots[1].day, "monday");
        assert_eq!(slots_to_proto(slots), wire);
    }

    #[test]
    fn bad_ids_name_their_field() {
        let err = parse_id("nope", "trainee_id").unwrap_err();
        assert!(err.to_string().contains("trainee_id"));
    }
}
