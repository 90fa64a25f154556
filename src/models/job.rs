use serde::{Deserialize, Serialize};

/// Upper bound on the number of tags attached to a job.
pub const MAX_TAGS: usize = 4;

/// A single employer posting. `id` is the only key shared between the
/// remote listing and the local bookmarks table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub company_name: String,
    pub company_logo: String,
    pub location: String,
    pub salary: Option<String>,
    pub description: String, // may contain HTML
    pub category: String,
    pub job_type: String,
    pub tags: Vec<String>, // ≤ MAX_TAGS
    pub posted_date: String,
    pub apply_url: String,
}

impl Job {
    /// Tags as stored in the `saved_jobs.tags` column.
    pub fn tags_joined(&self) -> String {
        self.tags.join(",")
    }

    /// Inverse of [`Job::tags_joined`]; blank segments are dropped.
    pub fn split_tags(raw: &str) -> Vec<String> {
        raw.split(',')
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Posting date without the time part, when upstream sends an ISO timestamp.
    pub fn posted_day(&self) -> &str {
        self.posted_date
            .split_once('T')
            .map(|(day, _)| day)
            .unwrap_or(&self.posted_date)
    }
}
