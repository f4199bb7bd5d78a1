use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, TimeZone, Utc};

use crate::util::{Clock, IdGenerator};

/// Clock pinned to a known instant so record timestamps are assertable.
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
                .single()
                .expect("valid fixed timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Deterministic id source producing "id-1", "id-2", ...
pub struct SequenceIdGenerator {
    next: AtomicUsize,
}

impl SequenceIdGenerator {
    pub fn new() -> Self {
        Self {
            next: AtomicUsize::new(1),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> String {
        format!("id-{}", self.next.fetch_add(1, Ordering::Relaxed))
    }
}

pub mod fixtures {
    use chrono::{TimeZone, Utc};

    use crate::models::domain::{
        Answer, Exam, ExamRecord, Question, QuestionType, ScoringMode,
    };

    /// Single-choice question with four generic options.
    pub fn single_question(id: &str, correct_index: usize, score: i32) -> Question {
        Question {
            id: id.to_string(),
            question_type: QuestionType::Single,
            text: format!("Pick the right option for {}", id),
            options: vec![
                "option a".to_string(),
                "option b".to_string(),
                "option c".to_string(),
                "option d".to_string(),
            ],
            correct_answer: Answer::Single(correct_index),
            score,
        }
    }

    /// Multiple-choice question with four generic options.
    pub fn multiple_question(id: &str, correct_indices: Vec<usize>, score: i32) -> Question {
        Question {
            id: id.to_string(),
            question_type: QuestionType::Multiple,
            text: format!("Pick every right option for {}", id),
            options: vec![
                "option a".to_string(),
                "option b".to_string(),
                "option c".to_string(),
                "option d".to_string(),
            ],
            correct_answer: Answer::Multiple(correct_indices),
            score,
        }
    }

    pub fn exam_with_questions(
        id: &str,
        question_ids: Vec<&str>,
        total_score: i32,
        scoring_mode: ScoringMode,
    ) -> Exam {
        Exam {
            id: id.to_string(),
            title: format!("Exam {}", id),
            description: None,
            question_ids: question_ids.into_iter().map(String::from).collect(),
            total_score,
            scoring_mode,
            created_at: Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0)
                .single()
                .expect("valid fixed timestamp"),
        }
    }

    pub fn record_for_exam(
        id: &str,
        exam_id: &str,
        total_score: i32,
        scoring_mode: ScoringMode,
    ) -> ExamRecord {
        ExamRecord {
            id: id.to_string(),
            exam_id: exam_id.to_string(),
            total_score,
            correct_count: 0,
            total_questions: 0,
            results: vec![],
            submitted_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
                .single()
                .expect("valid fixed timestamp"),
            scoring_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_id_generator_counts_up() {
        let ids = SequenceIdGenerator::new();
        assert_eq!(ids.next_id(), "id-1");
        assert_eq!(ids.next_id(), "id-2");
    }

    #[test]
    fn fixed_clock_always_returns_the_same_instant() {
        let clock = FixedClock::default();
        assert_eq!(clock.now(), clock.now());
    }
}
