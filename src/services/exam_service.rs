use std::sync::Arc;

use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::Exam;
use crate::models::dto::CreateExamRequest;
use crate::repositories::{ExamRepository, QuestionRepository};
use crate::util::{Clock, IdGenerator};

pub struct ExamService {
    exams: Arc<dyn ExamRepository>,
    questions: Arc<dyn QuestionRepository>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl ExamService {
    pub fn new(
        exams: Arc<dyn ExamRepository>,
        questions: Arc<dyn QuestionRepository>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            exams,
            questions,
            ids,
            clock,
        }
    }

    /// Assembles and stores an exam. `total_score` is the sum of the scores
    /// of the question ids that resolve in the bank; dangling ids stay in the
    /// exam's question list but contribute nothing.
    pub fn create_exam(&self, request: CreateExamRequest) -> AppResult<Exam> {
        request.validate()?;

        let mut total_score = 0;
        for question_id in &request.question_ids {
            if let Some(question) = self.questions.find_by_id(question_id)? {
                total_score += question.score;
            }
        }

        let exam = Exam {
            id: self.ids.next_id(),
            title: request.title,
            description: request.description,
            question_ids: request.question_ids,
            total_score,
            scoring_mode: request.scoring_mode,
            created_at: self.clock.now(),
        };

        log::info!(
            "Creating exam '{}' with {} questions worth {} points",
            exam.id,
            exam.question_ids.len(),
            exam.total_score
        );
        self.exams.insert(exam)
    }

    pub fn get_exam(&self, id: &str) -> AppResult<Option<Exam>> {
        self.exams.find_by_id(id)
    }

    pub fn delete_exam(&self, id: &str) -> AppResult<()> {
        if self.exams.delete(id)? {
            log::info!("Deleted exam '{}'", id);
            Ok(())
        } else {
            Err(AppError::NotFound(format!("Exam with id '{}' not found", id)))
        }
    }

    pub fn exam_count(&self) -> AppResult<usize> {
        self.exams.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::ScoringMode;
    use crate::repositories::{InMemoryExamRepository, InMemoryQuestionRepository};
    use crate::test_utils::fixtures::{multiple_question, single_question};
    use crate::test_utils::{FixedClock, SequenceIdGenerator};

    fn make_service() -> ExamService {
        let questions = vec![
            single_question("q-1", 1, 10),
            single_question("q-2", 0, 10),
            multiple_question("q-3", vec![0, 1, 2], 15),
        ];
        ExamService::new(
            Arc::new(InMemoryExamRepository::new()),
            Arc::new(InMemoryQuestionRepository::with_questions(questions)),
            Arc::new(SequenceIdGenerator::new()),
            Arc::new(FixedClock::default()),
        )
    }

    fn make_request(question_ids: Vec<&str>) -> CreateExamRequest {
        CreateExamRequest {
            title: "Frontend basics".to_string(),
            description: None,
            question_ids: question_ids.into_iter().map(String::from).collect(),
            scoring_mode: ScoringMode::Add,
        }
    }

    #[test]
    fn create_exam_sums_resolved_question_scores() {
        let service = make_service();

        let exam = service
            .create_exam(make_request(vec!["q-1", "q-2", "q-3"]))
            .expect("create should succeed");

        assert_eq!(exam.total_score, 35);
        assert_eq!(exam.question_ids.len(), 3);
        assert_eq!(service.exam_count().expect("count should succeed"), 1);
    }

    #[test]
    fn create_exam_skips_dangling_question_ids_in_total() {
        let service = make_service();

        let exam = service
            .create_exam(make_request(vec!["q-1", "missing", "q-3"]))
            .expect("create should succeed");

        assert_eq!(exam.total_score, 25);
        // The dangling id stays in the ordered list.
        assert_eq!(exam.question_ids[1], "missing");
    }

    #[test]
    fn create_exam_stamps_injected_clock_and_id() {
        let service = make_service();

        let exam = service
            .create_exam(make_request(vec!["q-1"]))
            .expect("create should succeed");

        assert_eq!(exam.id, "id-1");
        assert_eq!(exam.created_at, FixedClock::default().now());
    }

    #[test]
    fn delete_exam_reports_not_found() {
        let service = make_service();

        let err = service.delete_exam("missing").expect_err("nothing stored");
        assert_eq!(err.error_code(), "NOT_FOUND");
    }
}
