//! Domain models and operation parameters used between controllers, services and
//! repositories.

pub mod section;
pub mod student;
pub mod survey;
