use super::scope::ViewModelScope;
use crate::core::repository::JobRepository;
use crate::errors::AppResult;
use crate::models::filter::JobFilter;
use crate::models::job::Job;
use crate::models::ui_state::UiState;
use crate::remote::JobSource;
use futures::StreamExt;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub type HomeUiState = UiState<Vec<Job>>;

/// Home feed: one list state plus the ids of bookmarked jobs.
pub struct HomeViewModel<S> {
    repository: Arc<JobRepository<S>>,
    ui_state: Arc<watch::Sender<HomeUiState>>,
    saved_job_ids: Arc<watch::Sender<HashSet<i64>>>,
    last_filter: Mutex<JobFilter>,
    scope: ViewModelScope,
}

impl<S: JobSource + 'static> HomeViewModel<S> {
    pub fn new(repository: Arc<JobRepository<S>>) -> Self {
        let vm = Self {
            repository,
            ui_state: Arc::new(watch::Sender::new(UiState::Loading)),
            saved_job_ids: Arc::new(watch::Sender::new(HashSet::new())),
            last_filter: Mutex::new(JobFilter::default()),
            scope: ViewModelScope::new(),
        };
        vm.observe_saved_jobs();
        vm
    }

    pub fn ui_state(&self) -> watch::Receiver<HomeUiState> {
        self.ui_state.subscribe()
    }

    pub fn current_state(&self) -> HomeUiState {
        self.ui_state.borrow().clone()
    }

    pub fn saved_job_ids(&self) -> watch::Receiver<HashSet<i64>> {
        self.saved_job_ids.subscribe()
    }

    /// State flips to `Loading` right away; the result lands whenever the
    /// call completes.
    pub fn load_jobs(&self, filter: JobFilter) -> JoinHandle<()> {
        if let Ok(mut last) = self.last_filter.lock() {
            *last = filter.clone();
        }

        self.ui_state.send_replace(UiState::Loading);

        let repository = self.repository.clone();
        let ui_state = self.ui_state.clone();
        self.scope.launch(async move {
            let result = repository.search_jobs(&filter).await;
            if let Err(e) = &result {
                tracing::warn!(error = %e, "home feed load failed");
            }
            ui_state.send_replace(UiState::from_result(result));
        })
    }

    /// Re-issue the last filter.
    pub fn refresh(&self) -> JoinHandle<()> {
        let filter = self
            .last_filter
            .lock()
            .map(|f| f.clone())
            .unwrap_or_default();
        self.load_jobs(filter)
    }

    pub fn toggle_bookmark(&self, job: &Job) -> AppResult<bool> {
        self.repository.toggle_bookmark(job)
    }

    fn observe_saved_jobs(&self) {
        let stream = self.repository.saved_jobs();
        let ids = self.saved_job_ids.clone();
        self.scope.launch(async move {
            let mut stream = std::pin::pin!(stream);
            while let Some(jobs) = stream.next().await {
                ids.send_replace(jobs.iter().map(|j| j.id).collect());
            }
        });
    }
}
