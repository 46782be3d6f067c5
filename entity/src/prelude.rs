pub use super::multiple_answer::Entity as MultipleAnswer;
pub use super::question::Entity as Question;
pub use super::response::Entity as Response;
pub use super::section::Entity as Section;
pub use super::student::Entity as Student;
pub use super::survey::Entity as Survey;
pub use super::text_answer::Entity as TextAnswer;
