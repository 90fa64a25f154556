//! HTTP client for the alert-preferences endpoint.

use super::dto::{PreferenceRequestDto, PreferenceResponseDto, UserPreferencesResponseDto};
use crate::errors::{AppError, AppResult};
use std::future::Future;
use std::time::Duration;

/// What the settings screen and the token registrar need from the endpoint.
pub trait PreferencesGateway: Send + Sync {
    fn save_preference(
        &self,
        request: &PreferenceRequestDto,
    ) -> impl Future<Output = AppResult<PreferenceResponseDto>> + Send;
}

pub struct PreferencesApi {
    client: reqwest::Client,
    base_url: String,
}

impl PreferencesApi {
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn check_status(response: reqwest::Response, what: &str) -> AppResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %body, "preferences endpoint error");
        Err(AppError::Api {
            status: status.as_u16(),
            message: format!("Failed to {}", what),
        })
    }

    /// `GET /preferences?userId=…`
    pub async fn get_user_preferences(&self, user_id: &str) -> AppResult<Vec<PreferenceRequestDto>> {
        let response = self
            .client
            .get(format!("{}/preferences", self.base_url))
            .query(&[("userId", user_id)])
            .send()
            .await?;
        let response = Self::check_status(response, "load preferences").await?;
        let body: UserPreferencesResponseDto = response.json().await?;
        Ok(body.preferences)
    }

    /// `DELETE /preferences/{id}`
    pub async fn delete_preference(&self, preference_id: &str) -> AppResult<()> {
        let response = self
            .client
            .delete(format!("{}/preferences/{}", self.base_url, preference_id))
            .send()
            .await?;
        Self::check_status(response, "delete preference").await?;
        Ok(())
    }
}

impl PreferencesGateway for PreferencesApi {
    /// `POST /preferences`
    async fn save_preference(&self, request: &PreferenceRequestDto) -> AppResult<PreferenceResponseDto> {
        tracing::debug!(user_id = %request.user_id, "saving alert preferences");
        let response = self
            .client
            .post(format!("{}/preferences", self.base_url))
            .json(request)
            .send()
            .await?;
        let response = Self::check_status(response, "save preferences").await?;
        Ok(response.json().await?)
    }
}
