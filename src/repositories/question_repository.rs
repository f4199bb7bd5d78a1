use std::collections::HashSet;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[cfg(test)]
use mockall::automock;

use crate::errors::{AppError, AppResult};
use crate::models::domain::Question;

/// Question-lookup seam for the scoring engine. Grading only reads; the
/// authoring surface uses the mutating operations.
#[cfg_attr(test, automock)]
pub trait QuestionRepository: Send + Sync {
    fn find_by_id(&self, id: &str) -> AppResult<Option<Question>>;
    /// All questions whose id is not in `exclude_ids`, in insertion order.
    fn list_except(&self, exclude_ids: &HashSet<String>) -> AppResult<Vec<Question>>;
    fn insert(&self, question: Question) -> AppResult<Question>;
    fn delete(&self, id: &str) -> AppResult<bool>;
    fn count(&self) -> AppResult<usize>;
}

/// Insertion-ordered in-memory bank. Callers own the handle and share it with
/// the services; nothing in the crate holds global state.
#[derive(Default)]
pub struct InMemoryQuestionRepository {
    questions: RwLock<Vec<Question>>,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: RwLock::new(questions),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<Question>>> {
        self.questions
            .read()
            .map_err(|_| AppError::InternalError("question store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<Question>>> {
        self.questions
            .write()
            .map_err(|_| AppError::InternalError("question store lock poisoned".to_string()))
    }
}

impl QuestionRepository for InMemoryQuestionRepository {
    fn find_by_id(&self, id: &str) -> AppResult<Option<Question>> {
        let questions = self.read()?;
        Ok(questions.iter().find(|q| q.id == id).cloned())
    }

    fn list_except(&self, exclude_ids: &HashSet<String>) -> AppResult<Vec<Question>> {
        let questions = self.read()?;
        Ok(questions
            .iter()
            .filter(|q| !exclude_ids.contains(&q.id))
            .cloned()
            .collect())
    }

    fn insert(&self, question: Question) -> AppResult<Question> {
        let mut questions = self.write()?;
        questions.push(question.clone());
        Ok(question)
    }

    fn delete(&self, id: &str) -> AppResult<bool> {
        let mut questions = self.write()?;
        match questions.iter().position(|q| q.id == id) {
            Some(index) => {
                questions.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn count(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }
}
