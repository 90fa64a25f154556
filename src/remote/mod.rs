//! Remote collaborators: the Remotive jobs endpoint (or an offline fixture
//! standing in for it) and the alert-preferences endpoint.

pub mod dto;
pub mod fixture;
pub mod jobs_api;
pub mod mapper;
pub mod preferences_api;

use crate::errors::AppResult;
use crate::models::filter::RemoteQuery;
use dto::JobResponseDto;
use std::future::Future;

pub use fixture::FixtureSource;
pub use jobs_api::RemotiveApi;
pub use preferences_api::{PreferencesApi, PreferencesGateway};

/// Source of unpaginated job listings.
pub trait JobSource: Send + Sync {
    /// One call, one criterion. `limit` is a result-count hint.
    fn remote_jobs(
        &self,
        query: &RemoteQuery,
        limit: Option<u32>,
    ) -> impl Future<Output = AppResult<JobResponseDto>> + Send;
}

/// The sources the CLI can be wired with.
pub enum RemoteSource {
    Http(RemotiveApi),
    Fixture(FixtureSource),
}

impl JobSource for RemoteSource {
    async fn remote_jobs(
        &self,
        query: &RemoteQuery,
        limit: Option<u32>,
    ) -> AppResult<JobResponseDto> {
        match self {
            RemoteSource::Http(api) => api.remote_jobs(query, limit).await,
            RemoteSource::Fixture(f) => f.remote_jobs(query, limit).await,
        }
    }
}
