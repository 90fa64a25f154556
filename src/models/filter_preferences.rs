use super::filter::JobFilter;
use serde::Serialize;

/// The only row id ever written to `filter_preferences`.
pub const FILTER_PREFERENCES_ID: i64 = 1;

/// Last-applied category / job-type filter. Overwritten wholesale on save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterPreferences {
    pub category: String,
    pub job_type: String,
    pub last_updated: i64,
}

impl FilterPreferences {
    pub fn to_filter(&self) -> JobFilter {
        JobFilter {
            category: self.category.clone(),
            job_type: self.job_type.clone(),
            ..JobFilter::default()
        }
    }
}
