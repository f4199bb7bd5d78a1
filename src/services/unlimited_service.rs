use std::sync::Arc;

use crate::errors::AppResult;
use crate::models::domain::{Answer, UnlimitedOutcome};
use crate::repositories::QuestionRepository;

/// Grades one answer at a time for the unlimited quiz flow: no fixed exam,
/// the caller carries the running score between calls and draws the next
/// question from the bank.
pub struct UnlimitedModeService {
    questions: Arc<dyn QuestionRepository>,
}

impl UnlimitedModeService {
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Evaluates a single answer against the running score. Correct answers
    /// never gain points in this mode, they only prevent loss; incorrect
    /// answers deduct the question's score with the new total floored at
    /// zero. `score_change` always reports the nominal penalty, even when the
    /// floor makes the applied change smaller. An unknown question id is a
    /// no-op, not an error.
    pub fn evaluate_one(
        &self,
        question_id: &str,
        user_answer: Option<&Answer>,
        current_score: i32,
    ) -> AppResult<UnlimitedOutcome> {
        let Some(question) = self.questions.find_by_id(question_id)? else {
            return Ok(UnlimitedOutcome {
                is_correct: false,
                new_score: current_score,
                score_change: 0,
                question: None,
            });
        };

        let is_correct = question.grade(user_answer);
        let (new_score, score_change) = if is_correct {
            (current_score, 0)
        } else {
            ((current_score - question.score).max(0), -question.score)
        };

        log::debug!(
            "Unlimited answer for '{}': correct={}, score {} -> {}",
            question_id,
            is_correct,
            current_score,
            new_score
        );

        Ok(UnlimitedOutcome {
            is_correct,
            new_score,
            score_change,
            question: Some(question),
        })
    }
}
