// Storage services, one per entity

pub mod registration_service;
pub mod routine_service;
pub mod trainee_service;
pub mod workout_service;

pub use registration_service::RegistrationService;
pub use routine_service::RoutineService;
pub use trainee_service::TraineeService;
pub use workout_service::WorkoutService;
