use super::job::Job;
use serde::Serialize;

/// A bookmarked job (`saved_jobs` row).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SavedJob {
    pub job: Job,
    pub saved_at: i64, // epoch millis
}
