use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

#[cfg(test)]
use mockall::automock;

use crate::errors::{AppError, AppResult};
use crate::models::domain::ExamRecord;

/// Append-only history of graded submissions. Records are never updated or
/// removed once inserted.
#[cfg_attr(test, automock)]
pub trait ExamRecordRepository: Send + Sync {
    fn insert(&self, record: ExamRecord) -> AppResult<ExamRecord>;
    fn list_by_exam(&self, exam_id: &str) -> AppResult<Vec<ExamRecord>>;
    fn count(&self) -> AppResult<usize>;
}

#[derive(Default)]
pub struct InMemoryExamRecordRepository {
    records: RwLock<Vec<ExamRecord>>,
}

impl InMemoryExamRecordRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Vec<ExamRecord>>> {
        self.records
            .read()
            .map_err(|_| AppError::InternalError("record store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Vec<ExamRecord>>> {
        self.records
            .write()
            .map_err(|_| AppError::InternalError("record store lock poisoned".to_string()))
    }
}

impl ExamRecordRepository for InMemoryExamRecordRepository {
    fn insert(&self, record: ExamRecord) -> AppResult<ExamRecord> {
        let mut records = self.write()?;
        records.push(record.clone());
        Ok(record)
    }

    fn list_by_exam(&self, exam_id: &str) -> AppResult<Vec<ExamRecord>> {
        let records = self.read()?;
        Ok(records
            .iter()
            .filter(|r| r.exam_id == exam_id)
            .cloned()
            .collect())
    }

    fn count(&self) -> AppResult<usize> {
        Ok(self.read()?.len())
    }
}
