pub mod exam_service;
pub mod question_bank_service;
pub mod scoring_service;
pub mod unlimited_service;

pub use exam_service::ExamService;
pub use question_bank_service::QuestionBankService;
pub use scoring_service::ScoringService;
pub use unlimited_service::UnlimitedModeService;
