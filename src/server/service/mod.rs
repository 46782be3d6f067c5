//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing survey dates, section survey references and student
//!   contact uniqueness
//! - **Orchestration**: Coordinating repository calls, such as resolving a section's
//!   survey before writing the section
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod section;
pub mod student;
pub mod survey;
