//! DTO → domain translation.

use super::dto::{JobDto, PreferenceRequestDto};
use crate::models::alert_preferences::AlertPreferences;
use crate::models::job::{Job, MAX_TAGS};

pub const PLACEHOLDER_LOGO: &str = "https://via.placeholder.com/150";
pub const DEFAULT_JOB_TYPE: &str = "Full-time";
pub const UNSPECIFIED_SALARY: &str = "Not specified";
pub const WORLDWIDE_TAG: &str = "🌍 Worldwide";
pub const SALARY_TAG: &str = "💰 Salary Listed";

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl JobDto {
    /// Tags in fixed order: job type, category, worldwide, salary; capped.
    pub fn extract_tags(&self) -> Vec<String> {
        let mut tags = Vec::with_capacity(MAX_TAGS);

        if let Some(jt) = non_empty(&self.job_type) {
            tags.push(jt.to_string());
        }

        tags.push(self.category.clone());

        if self.location.to_lowercase().contains("worldwide") {
            tags.push(WORLDWIDE_TAG.to_string());
        }

        if non_empty(&self.salary).is_some() {
            tags.push(SALARY_TAG.to_string());
        }

        tags.truncate(MAX_TAGS);
        tags
    }

    pub fn into_domain(self) -> Job {
        let tags = self.extract_tags();
        let company_logo = if self.company_logo.is_empty() {
            PLACEHOLDER_LOGO.to_string()
        } else {
            self.company_logo
        };

        Job {
            id: self.id,
            title: self.title,
            company_name: self.company_name,
            company_logo,
            location: self.location,
            salary: Some(self.salary.unwrap_or_else(|| UNSPECIFIED_SALARY.to_string())),
            description: self.description,
            category: self.category,
            job_type: self.job_type.unwrap_or_else(|| DEFAULT_JOB_TYPE.to_string()),
            tags,
            posted_date: self.publication_date,
            apply_url: self.url,
        }
    }
}

/// The push token doubles as the user id on the preferences endpoint.
pub fn preference_request(token: &str, prefs: &AlertPreferences) -> PreferenceRequestDto {
    PreferenceRequestDto {
        user_id: token.to_string(),
        fcm_token: token.to_string(),
        enable_alerts: prefs.enable_alerts,
        alert_frequency: prefs.alert_frequency.as_str().to_string(),
        job_types: prefs.job_types.iter().cloned().collect(),
        preference_id: None,
    }
}
