use serde::Deserialize;
use validator::Validate;

use crate::models::domain::exam::ScoringMode;
use crate::models::domain::question::{Answer, QuestionType};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, max = 500))]
    pub text: String,

    pub question_type: QuestionType,

    #[validate(length(min = 2, max = 26))]
    pub options: Vec<String>,

    pub correct_answer: Answer,

    #[validate(range(min = 1))]
    pub score: i32,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExamRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    pub description: Option<String>,

    #[validate(length(min = 1))]
    pub question_ids: Vec<String>,

    pub scoring_mode: ScoringMode,
}
