// Storage-side data models

pub mod registration;
pub mod routine;
pub mod trainee;
pub mod workout;

pub use registration::*;
pub use routine::*;
pub use trainee::*;
pub use workout::*;
