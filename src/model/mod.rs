//! Wire-level data transfer objects.
//!
//! These are the JSON shapes accepted and returned by the HTTP API. Server-side domain
//! models live in `server::model` and convert to and from these types at the
//! controller boundary.

pub mod api;
pub mod section;
pub mod student;
pub mod survey;
