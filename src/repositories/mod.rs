pub mod exam_record_repository;
pub mod exam_repository;
pub mod question_repository;

pub use exam_record_repository::{ExamRecordRepository, InMemoryExamRecordRepository};
pub use exam_repository::{ExamRepository, InMemoryExamRepository};
pub use question_repository::{InMemoryQuestionRepository, QuestionRepository};
