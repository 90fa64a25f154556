use super::scope::ViewModelScope;
use crate::core::repository::JobRepository;
use crate::errors::AppResult;
use crate::models::job::Job;
use crate::models::ui_state::JobDetailsUiState;
use crate::remote::JobSource;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub struct JobDetailsViewModel<S> {
    repository: Arc<JobRepository<S>>,
    ui_state: Arc<watch::Sender<JobDetailsUiState>>,
    is_bookmarked: Arc<watch::Sender<bool>>,
    scope: ViewModelScope,
}

impl<S: JobSource + 'static> JobDetailsViewModel<S> {
    pub fn new(repository: Arc<JobRepository<S>>) -> Self {
        Self {
            repository,
            ui_state: Arc::new(watch::Sender::new(JobDetailsUiState::Loading)),
            is_bookmarked: Arc::new(watch::Sender::new(false)),
            scope: ViewModelScope::new(),
        }
    }

    pub fn ui_state(&self) -> watch::Receiver<JobDetailsUiState> {
        self.ui_state.subscribe()
    }

    pub fn current_state(&self) -> JobDetailsUiState {
        self.ui_state.borrow().clone()
    }

    pub fn is_bookmarked(&self) -> watch::Receiver<bool> {
        self.is_bookmarked.subscribe()
    }

    pub fn load_job_details(&self, id: i64) -> JoinHandle<()> {
        self.ui_state.send_replace(JobDetailsUiState::Loading);

        let repository = self.repository.clone();
        let ui_state = self.ui_state.clone();
        let is_bookmarked = self.is_bookmarked.clone();
        self.scope.launch(async move {
            match repository.get_job_details(id).await {
                Ok(job) => {
                    let saved = bookmark_or_unsaved(id, repository.store().is_job_saved(id));
                    is_bookmarked.send_replace(saved);
                    ui_state.send_replace(JobDetailsUiState::Success(Box::new(job)));
                }
                Err(e) => {
                    tracing::warn!(job_id = id, error = %e, "job details failed");
                    ui_state.send_replace(JobDetailsUiState::Error(e.to_string()));
                }
            }
        })
    }

    /// Flips the bookmark in the store and mirrors the new state.
    pub fn toggle_bookmark(&self, job: &Job) -> AppResult<bool> {
        let saved = self.repository.toggle_bookmark(job)?;
        self.is_bookmarked.send_replace(saved);
        Ok(saved)
    }
}

/// A failed bookmark lookup shows the job as not saved, but leaves a trace.
fn bookmark_or_unsaved(id: i64, lookup: AppResult<bool>) -> bool {
    lookup.unwrap_or_else(|e| {
        tracing::warn!(job_id = id, error = %e, "bookmark lookup failed");
        false
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn failed_bookmark_lookup_reads_as_unsaved() {
        assert!(bookmark_or_unsaved(1, Ok(true)));
        assert!(!bookmark_or_unsaved(1, Ok(false)));
        assert!(!bookmark_or_unsaved(
            1,
            Err(AppError::Store("connection mutex poisoned".into()))
        ));
    }
}
