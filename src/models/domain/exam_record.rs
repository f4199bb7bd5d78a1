use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::exam::ScoringMode;
use crate::models::domain::question::{Answer, Question};

/// One graded submission. Created once by the scoring engine and never
/// mutated afterwards; stored records form an append-only history.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExamRecord {
    pub id: String,
    pub exam_id: String,
    pub total_score: i32,
    pub correct_count: usize,
    /// The exam's declared question count (`question_ids.len()`), even when
    /// some ids did not resolve in the bank and produced no result entry.
    pub total_questions: usize,
    pub results: Vec<QuestionResult>,
    pub submitted_at: DateTime<Utc>,
    pub scoring_mode: ScoringMode,
}

/// A single question's outcome within an [`ExamRecord`], in exam order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionResult {
    pub question_id: String,
    pub user_answer: Option<Answer>,
    pub correct_answer: Answer,
    pub is_correct: bool,
    pub score_delta: i32,
}

/// Outcome of grading one answer in unlimited mode. The graded question is
/// echoed back so the caller can render feedback before drawing the next one.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnlimitedOutcome {
    pub is_correct: bool,
    pub new_score: i32,
    /// Nominal delta: zero for a correct answer, the full negative question
    /// score for an incorrect one, even when `new_score` clamped at zero and
    /// the applied change was smaller.
    pub score_change: i32,
    pub question: Option<Question>,
}
