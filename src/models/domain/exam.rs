use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Exam {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Ordered question ids. May reference questions no longer in the bank;
    /// such entries are skipped during grading, never treated as fatal.
    pub question_ids: Vec<String>,
    /// Sum of the resolved questions' scores at creation time. Subtractive
    /// grading starts from this value.
    pub total_score: i32,
    pub scoring_mode: ScoringMode,
    pub created_at: DateTime<Utc>,
}

/// Policy for converting per-question correctness into points.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// Correct answers are rewarded, incorrect answers cost nothing.
    Add,
    /// Incorrect answers are penalized against the exam's maximum achievable
    /// score, floored at zero after summation.
    Subtract,
}
