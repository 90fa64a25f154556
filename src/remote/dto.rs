//! Wire types for the jobs and preferences endpoints.

use serde::{Deserialize, Serialize};

/// Body of `GET /remote-jobs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobResponseDto {
    #[serde(rename = "0-legal-notice", default)]
    pub legal_notice: String,
    #[serde(rename = "job-count", default)]
    pub job_count: i64,
    #[serde(default)]
    pub jobs: Vec<JobDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDto {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub company_name: String,
    #[serde(default)]
    pub company_logo: String,
    pub category: String,
    #[serde(default)]
    pub job_type: Option<String>,
    pub publication_date: String,
    #[serde(rename = "candidate_required_location", default)]
    pub location: String,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /preferences`; also the items of `GET /preferences`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRequestDto {
    pub user_id: String,
    pub fcm_token: String,
    pub enable_alerts: bool,
    pub alert_frequency: String,
    pub job_types: Vec<String>,
    /// Only present on items returned by the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceResponseDto {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub preference_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPreferencesResponseDto {
    #[serde(default)]
    pub preferences: Vec<PreferenceRequestDto>,
}
