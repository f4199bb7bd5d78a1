pub mod request;
pub use request::{CreateExamRequest, CreateQuestionRequest};
