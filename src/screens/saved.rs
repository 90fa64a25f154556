use super::scope::ViewModelScope;
use crate::core::repository::JobRepository;
use crate::errors::AppResult;
use crate::models::job::Job;
use crate::remote::JobSource;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::watch;

/// Bookmarks screen; the list follows the store.
pub struct SavedJobsViewModel<S> {
    repository: Arc<JobRepository<S>>,
    saved_jobs: Arc<watch::Sender<Vec<Job>>>,
    _scope: ViewModelScope,
}

impl<S: JobSource + 'static> SavedJobsViewModel<S> {
    pub fn new(repository: Arc<JobRepository<S>>) -> Self {
        let saved_jobs = Arc::new(watch::Sender::new(repository.saved_jobs_now()));
        let scope = ViewModelScope::new();

        let stream = repository.saved_jobs();
        let sink = saved_jobs.clone();
        scope.launch(async move {
            let mut stream = std::pin::pin!(stream);
            while let Some(jobs) = stream.next().await {
                sink.send_replace(jobs);
            }
        });

        Self {
            repository,
            saved_jobs,
            _scope: scope,
        }
    }

    pub fn saved_jobs(&self) -> watch::Receiver<Vec<Job>> {
        self.saved_jobs.subscribe()
    }

    pub fn current(&self) -> Vec<Job> {
        self.saved_jobs.borrow().clone()
    }

    pub fn remove_job(&self, job: &Job) -> AppResult<()> {
        self.repository.remove_saved_job(job.id)?;
        self.saved_jobs.send_replace(self.repository.saved_jobs_now());
        Ok(())
    }

    /// Drops every bookmark; returns how many were removed.
    pub fn clear_all(&self) -> AppResult<usize> {
        let n = self.repository.store().clear_saved_jobs()?;
        self.saved_jobs.send_replace(self.repository.saved_jobs_now());
        Ok(n)
    }
}
