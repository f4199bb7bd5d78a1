use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of timestamps for newly created records. Injected so tests can pin
/// `submitted_at`/`created_at` values instead of reading ambient time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of identifiers for newly created questions, exams and records.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
