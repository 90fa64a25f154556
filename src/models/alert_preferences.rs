use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Job types offered by the alert settings and the filter sheet.
pub const JOB_TYPES: &[&str] = &["Full-time", "Part-time", "Contract", "Freelance", "Internship"];

/// Categories offered by the filter sheet ("" stands for all categories).
pub const CATEGORIES: &[&str] = &[
    "Software Development",
    "Design",
    "Marketing",
    "Customer Support",
    "Sales",
    "Product",
    "Data Science",
    "DevOps",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertFrequency {
    #[default]
    Daily,
    Weekly,
}

impl AlertFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertFrequency::Daily => "Daily",
            AlertFrequency::Weekly => "Weekly",
        }
    }

    /// Accepts any casing coming from the CLI or the endpoint.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(AlertFrequency::Daily),
            "weekly" => Ok(AlertFrequency::Weekly),
            other => Err(AppError::InvalidFrequency(other.to_string())),
        }
    }
}

impl fmt::Display for AlertFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User-level alert configuration kept on the preferences endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertPreferences {
    pub enable_alerts: bool,
    pub alert_frequency: AlertFrequency,
    pub job_types: BTreeSet<String>,
}
