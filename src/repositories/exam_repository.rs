use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[cfg(test)]
use mockall::automock;

use crate::errors::{AppError, AppResult};
use crate::models::domain::Exam;

#[cfg_attr(test, automock)]
pub trait ExamRepository: Send + Sync {
    fn find_by_id(&self, id: &str) -> AppResult<Option<Exam>>;
    fn insert(&self, exam: Exam) -> AppResult<Exam>;
    fn delete(&self, id: &str) -> AppResult<bool>;
    fn count(&self) -> AppResult<usize>;
}

#[derive(Default)]
pub struct InMemoryExamRepository {
    exams: RwLock<Vec<Exam>>,
}

impl InMemoryExamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<Exam>>> {
        self.exams
            .read()
            .map_err(|_| AppError::InternalError("exam store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<Exam>>> {
        self.exams
            .write()
            .map_err(|_| AppError::InternalError("exam store lock poisoned".to_string()))
    }
}

impl ExamRepository for InMemoryExamRepository {
    fn find_by_id(&self, id: &str) -> AppResult<Option<Exam>> {
        let exams = self.read()?;
        Ok(exams.iter().find(|e| e.id == id).cloned())
    }

    fn insert(&self, exam: Exam) -> AppResult<Exam> {
        let mut exams = self.write()?;
        exams.push(exam.clone());
        Ok(exam)
    }

    fn delete(&self, id: &str) -> AppResult<bool> {
        let mut exams = self.write()?;
        match exams.iter().position(|e| e.id == id) {
            Some(index) => {
                exams.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn count(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }
}
