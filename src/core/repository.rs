//! Job repository: one facade over the remote job source and the local store.
//!
//! * search is remote-only, dispatched on the first non-empty filter field;
//! * single-job lookup is local-first, with a full remote rescan on a miss;
//! * bookmark reads are continuously updated streams over the store.

use crate::db::LocalStore;
use crate::errors::{AppError, AppResult};
use crate::models::filter::{JobFilter, RemoteQuery};
use crate::models::job::Job;
use crate::remote::JobSource;
use crate::remote::dto::JobDto;
use futures::{Stream, StreamExt};
use tokio_stream::wrappers::WatchStream;

pub struct JobRepository<S> {
    source: S,
    store: LocalStore,
    limit: Option<u32>,
}

impl<S: JobSource> JobRepository<S> {
    pub fn new(source: S, store: LocalStore) -> Self {
        Self {
            source,
            store,
            limit: None,
        }
    }

    /// Result-count hint forwarded with every search.
    pub fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub async fn search_jobs(&self, filter: &JobFilter) -> AppResult<Vec<Job>> {
        let query = filter.remote_query();
        tracing::debug!(?query, "search jobs");

        let response = self.source.remote_jobs(&query, self.limit).await?;
        Ok(response.jobs.into_iter().map(JobDto::into_domain).collect())
    }

    /// A saved copy always wins over the remote one, even if it is stale.
    pub async fn get_job_details(&self, id: i64) -> AppResult<Job> {
        if let Some(job) = self.store.get_job_by_id(id)? {
            tracing::debug!(job_id = id, "job details served from local store");
            return Ok(job);
        }

        // No lookup by id upstream: rescan the whole listing.
        let response = self.source.remote_jobs(&RemoteQuery::All, None).await?;
        response
            .jobs
            .into_iter()
            .find(|j| j.id == id)
            .map(JobDto::into_domain)
            .ok_or(AppError::JobNotFound(id))
    }

    /// Saved jobs, newest bookmark first; re-emits after every write.
    pub fn saved_jobs(&self) -> impl Stream<Item = Vec<Job>> + Send + 'static {
        WatchStream::new(self.store.watch_saved_jobs())
            .map(|rows| rows.into_iter().map(|s| s.job).collect())
    }

    pub fn saved_jobs_now(&self) -> Vec<Job> {
        self.store
            .saved_jobs_now()
            .into_iter()
            .map(|s| s.job)
            .collect()
    }

    pub fn saved_jobs_count(&self) -> impl Stream<Item = usize> + Send + 'static {
        WatchStream::new(self.store.watch_saved_jobs()).map(|rows| rows.len())
    }

    pub fn save_job(&self, job: &Job) -> AppResult<()> {
        self.store.insert_job(job)
    }

    pub fn remove_saved_job(&self, id: i64) -> AppResult<()> {
        self.store.delete_job_by_id(id)
    }

    pub fn is_job_saved(&self, id: i64) -> impl Stream<Item = bool> + Send + 'static {
        WatchStream::new(self.store.watch_saved_jobs())
            .map(move |rows| rows.iter().any(|s| s.job.id == id))
    }

    /// Save when absent, remove when present. Returns the new state.
    pub fn toggle_bookmark(&self, job: &Job) -> AppResult<bool> {
        if self.store.is_job_saved(job.id)? {
            self.remove_saved_job(job.id)?;
            Ok(false)
        } else {
            self.save_job(job)?;
            Ok(true)
        }
    }
}
