//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test records with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows directly through SeaORM so a test
//! can arrange state without going through the repository under test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let survey = factory::create_survey(&db).await?;
//!     let student = factory::create_student(&db).await?;
//!
//!     // Create with dependencies
//!     let (survey, section) = factory::helpers::create_section_with_survey(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let survey = factory::survey::SurveyFactory::new(&db)
//!     .title("Alumni Tracer 2023")
//!     .published(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `survey` - Create survey records
//! - `section` - Create section records referencing a survey
//! - `student` - Create student records with unique contact details
//! - `helpers` - ID generation and multi-record convenience methods

pub mod helpers;
pub mod section;
pub mod student;
pub mod survey;

pub use section::create_section;
pub use student::create_student;
pub use survey::create_survey;
