//! HTTP client for the Remotive jobs endpoint.

use super::JobSource;
use super::dto::JobResponseDto;
use crate::errors::{AppError, AppResult};
use crate::models::filter::RemoteQuery;
use std::time::Duration;

pub struct RemotiveApi {
    client: reqwest::Client,
    base_url: String,
}

impl RemotiveApi {
    /// * `base_url` - e.g. `https://remotive.com/api`.
    /// * `timeout` - applied to connect and to the whole request.
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .user_agent(concat!("jobfinder/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Reuse an existing [`reqwest::Client`] (shares its connection pool).
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/remote-jobs", self.base_url)
    }
}

impl JobSource for RemotiveApi {
    async fn remote_jobs(
        &self,
        query: &RemoteQuery,
        limit: Option<u32>,
    ) -> AppResult<JobResponseDto> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some((key, value)) = query.param() {
            params.push((key, value.to_string()));
        }
        if let Some(l) = limit {
            params.push(("limit", l.to_string()));
        }

        tracing::debug!(url = %self.endpoint(), ?params, "GET remote jobs");

        let response = self
            .client
            .get(self.endpoint())
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "jobs endpoint returned an error");
            return Err(AppError::Api {
                status: status.as_u16(),
                message: "Failed to fetch jobs".to_string(),
            });
        }

        let body: JobResponseDto = response.json().await?;
        tracing::debug!(count = body.jobs.len(), "remote jobs received");
        Ok(body)
    }
}
