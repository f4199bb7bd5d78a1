use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    pub id: String,
    pub question_type: QuestionType,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: Answer,
    pub score: i32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Single,   // exactly one correct option index
    Multiple, // a set of correct option indices
}

/// A submitted or authored answer, encoded as option indices. Serializes as a
/// bare integer for single-choice and an array of integers for
/// multiple-choice, which is the shape the submission layer sends.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Single(usize),
    Multiple(Vec<usize>),
}

/// One submission: raw answers keyed by question id.
pub type AnswerSheet = HashMap<String, Answer>;

impl Question {
    /// Grades a submitted answer against this question. An absent answer or
    /// one whose shape does not match the question type is incorrect, never
    /// an error.
    ///
    /// Multiple-choice uses a length match plus a subset check over the
    /// submitted sequence. A sequence repeating a valid index can therefore
    /// pass as correct; callers relying on strict set equality must
    /// deduplicate before submitting.
    pub fn grade(&self, answer: Option<&Answer>) -> bool {
        match self.question_type {
            QuestionType::Single => matches!(
                (answer, &self.correct_answer),
                (Some(Answer::Single(a)), Answer::Single(c)) if a == c
            ),
            QuestionType::Multiple => match (answer, &self.correct_answer) {
                (Some(Answer::Multiple(selected)), Answer::Multiple(correct)) => {
                    selected.len() == correct.len()
                        && selected.iter().all(|idx| correct.contains(idx))
                }
                _ => false,
            },
        }
    }

    /// Checks the authoring invariant: the correct answer must match the
    /// question type and reference valid option indices.
    pub fn validate(&self) -> AppResult<()> {
        if self.options.len() < 2 {
            return Err(AppError::ValidationError(
                "question needs at least two options".to_string(),
            ));
        }
        if self.score <= 0 {
            return Err(AppError::ValidationError(
                "question score must be positive".to_string(),
            ));
        }

        match (&self.question_type, &self.correct_answer) {
            (QuestionType::Single, Answer::Single(idx)) => {
                if *idx >= self.options.len() {
                    return Err(AppError::ValidationError(format!(
                        "correct answer index {} is out of range for {} options",
                        idx,
                        self.options.len()
                    )));
                }
            }
            (QuestionType::Multiple, Answer::Multiple(indices)) => {
                if indices.is_empty() {
                    return Err(AppError::ValidationError(
                        "multiple-choice question needs at least one correct index".to_string(),
                    ));
                }
                if let Some(bad) = indices.iter().find(|idx| **idx >= self.options.len()) {
                    return Err(AppError::ValidationError(format!(
                        "correct answer index {} is out of range for {} options",
                        bad,
                        self.options.len()
                    )));
                }
            }
            _ => {
                return Err(AppError::ValidationError(
                    "correct answer shape does not match question type".to_string(),
                ));
            }
        }

        Ok(())
    }
}
