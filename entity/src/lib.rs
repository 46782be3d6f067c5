//! SeaORM entity definitions, one module per stored collection.
//!
//! Every record is keyed by a server-generated identifier stored as 32 lowercase
//! hex characters. `survey`, `section` and `student` back the REST resources;
//! `question`, `response`, `text_answer` and `multiple_answer` are storage
//! schemas only.

pub mod prelude;

pub mod multiple_answer;
pub mod question;
pub mod response;
pub mod section;
pub mod student;
pub mod survey;
pub mod text_answer;
