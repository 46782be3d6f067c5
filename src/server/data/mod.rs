//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Identifier parsing happens here, so callers pass identifiers exactly as received.

pub mod section;
pub mod student;
pub mod survey;
