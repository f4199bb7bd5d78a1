pub mod exam;
pub mod exam_record;
pub mod question;
pub use exam::{Exam, ScoringMode};
pub use exam_record::{ExamRecord, QuestionResult, UnlimitedOutcome};
pub use question::{Answer, AnswerSheet, Question, QuestionType};
