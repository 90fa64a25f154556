//! Offline job source: a JSON file in the Remotive response format, filtered
//! locally the way the endpoint filters.

use super::JobSource;
use super::dto::{JobDto, JobResponseDto};
use crate::errors::AppResult;
use crate::models::filter::RemoteQuery;
use std::path::PathBuf;

pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn matches(job: &JobDto, query: &RemoteQuery) -> bool {
        let contains = |hay: &str, needle: &str| hay.to_lowercase().contains(&needle.to_lowercase());

        match query {
            RemoteQuery::Search(q) => {
                contains(&job.title, q) || contains(&job.company_name, q) || contains(&job.description, q)
            }
            RemoteQuery::Category(c) => contains(&job.category, c),
            RemoteQuery::Company(c) => contains(&job.company_name, c),
            RemoteQuery::All => true,
        }
    }
}

impl JobSource for FixtureSource {
    async fn remote_jobs(
        &self,
        query: &RemoteQuery,
        limit: Option<u32>,
    ) -> AppResult<JobResponseDto> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let mut body: JobResponseDto = serde_json::from_str(&raw)?;

        body.jobs.retain(|j| Self::matches(j, query));
        if let Some(l) = limit {
            body.jobs.truncate(l as usize);
        }
        body.job_count = body.jobs.len() as i64;

        tracing::debug!(path = %self.path.display(), ?query, count = body.jobs.len(), "fixture jobs");
        Ok(body)
    }
}
