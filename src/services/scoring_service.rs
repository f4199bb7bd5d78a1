use std::sync::Arc;

use crate::errors::AppResult;
use crate::models::domain::{AnswerSheet, ExamRecord, QuestionResult, ScoringMode};
use crate::repositories::{ExamRecordRepository, ExamRepository, QuestionRepository};
use crate::util::{Clock, IdGenerator};

/// Grades full-exam submissions against the question bank.
pub struct ScoringService {
    exams: Arc<dyn ExamRepository>,
    questions: Arc<dyn QuestionRepository>,
    records: Arc<dyn ExamRecordRepository>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl ScoringService {
    pub fn new(
        exams: Arc<dyn ExamRepository>,
        questions: Arc<dyn QuestionRepository>,
        records: Arc<dyn ExamRecordRepository>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            exams,
            questions,
            records,
            ids,
            clock,
        }
    }

    /// Grades a submission and returns the resulting record without storing
    /// it. Returns `Ok(None)` when the exam id does not resolve; callers must
    /// check for the sentinel. No other input can fail grading: question ids
    /// missing from the bank are skipped and malformed answers count as
    /// incorrect.
    pub fn evaluate(
        &self,
        exam_id: &str,
        answers: &AnswerSheet,
        mode: ScoringMode,
    ) -> AppResult<Option<ExamRecord>> {
        let Some(exam) = self.exams.find_by_id(exam_id)? else {
            return Ok(None);
        };

        let total_questions = exam.question_ids.len();
        let mut running_total: i32 = 0;
        let mut correct_count: usize = 0;
        let mut results = Vec::with_capacity(total_questions);

        for question_id in &exam.question_ids {
            let Some(question) = self.questions.find_by_id(question_id)? else {
                continue;
            };

            let user_answer = answers.get(question_id);
            let is_correct = question.grade(user_answer);

            // Subtract mode accumulates only penalties here; the exam's
            // maximum is the baseline applied after the loop.
            if is_correct {
                correct_count += 1;
                if mode == ScoringMode::Add {
                    running_total += question.score;
                }
            } else if mode == ScoringMode::Subtract {
                running_total -= question.score;
            }

            let score_delta = if is_correct {
                question.score
            } else if mode == ScoringMode::Subtract {
                -question.score
            } else {
                0
            };

            results.push(QuestionResult {
                question_id: question_id.clone(),
                user_answer: user_answer.cloned(),
                correct_answer: question.correct_answer.clone(),
                is_correct,
                score_delta,
            });
        }

        let total_score = match mode {
            ScoringMode::Add => running_total,
            ScoringMode::Subtract => (exam.total_score + running_total).max(0),
        };

        log::debug!(
            "Graded exam '{}': {}/{} correct, {} points ({:?})",
            exam.id,
            correct_count,
            exam.question_ids.len(),
            total_score,
            mode
        );

        Ok(Some(ExamRecord {
            id: self.ids.next_id(),
            exam_id: exam.id,
            total_score,
            correct_count,
            // Declared question count, not the resolved one.
            total_questions,
            results,
            submitted_at: self.clock.now(),
            scoring_mode: mode,
        }))
    }

    /// Grades a submission and appends the record to the history.
    pub fn submit(
        &self,
        exam_id: &str,
        answers: &AnswerSheet,
        mode: ScoringMode,
    ) -> AppResult<Option<ExamRecord>> {
        match self.evaluate(exam_id, answers, mode)? {
            Some(record) => {
                log::info!(
                    "Recording submission '{}' for exam '{}'",
                    record.id,
                    record.exam_id
                );
                Ok(Some(self.records.insert(record)?))
            }
            None => Ok(None),
        }
    }
}
