use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;
use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::Question;
use crate::models::dto::CreateQuestionRequest;
use crate::repositories::QuestionRepository;
use crate::util::IdGenerator;

pub struct QuestionBankService {
    repository: Arc<dyn QuestionRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl QuestionBankService {
    pub fn new(repository: Arc<dyn QuestionRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { repository, ids }
    }

    /// Validates and stores a new question, assigning it an id.
    pub fn add_question(&self, request: CreateQuestionRequest) -> AppResult<Question> {
        request.validate()?;

        let question = Question {
            id: self.ids.next_id(),
            question_type: request.question_type,
            text: request.text,
            options: request.options,
            correct_answer: request.correct_answer,
            score: request.score,
        };
        question.validate()?;

        log::info!("Adding question '{}' to the bank", question.id);
        self.repository.insert(question)
    }

    pub fn delete_question(&self, id: &str) -> AppResult<()> {
        if self.repository.delete(id)? {
            log::info!("Deleted question '{}'", id);
            Ok(())
        } else {
            Err(AppError::NotFound(format!(
                "Question with id '{}' not found",
                id
            )))
        }
    }

    pub fn get_question(&self, id: &str) -> AppResult<Option<Question>> {
        self.repository.find_by_id(id)
    }

    pub fn question_count(&self) -> AppResult<usize> {
        self.repository.count()
    }

    /// Draws up to `count` questions whose ids are not in `exclude_ids`, in
    /// uniformly random order without repeats. Returns everything available
    /// when fewer than `count` remain; never pads and never fails for lack
    /// of questions. The bank itself is not touched.
    pub fn sample_excluding(
        &self,
        exclude_ids: &HashSet<String>,
        count: usize,
    ) -> AppResult<Vec<Question>> {
        let mut available = self.repository.list_except(exclude_ids)?;
        available.shuffle(&mut rand::thread_rng());
        available.truncate(count);
        Ok(available)
    }
}
