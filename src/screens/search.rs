use super::scope::{ViewModelScope, launch_in};
use crate::core::debounce::debounce_queries;
use crate::core::repository::JobRepository;
use crate::errors::AppResult;
use crate::models::filter::JobFilter;
use crate::models::job::Job;
use crate::models::search_history::SearchHistoryEntry;
use crate::remote::JobSource;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

struct SearchOutputs {
    results: watch::Sender<Vec<Job>>,
    is_searching: watch::Sender<bool>,
}

/// Search screen: debounced search-as-you-type plus explicit searches that
/// are recorded in the history.
pub struct SearchViewModel<S> {
    repository: Arc<JobRepository<S>>,
    query: watch::Sender<String>,
    outputs: Arc<SearchOutputs>,
    scope: ViewModelScope,
}

async fn perform_search<S: JobSource>(
    repository: Arc<JobRepository<S>>,
    outputs: Arc<SearchOutputs>,
    query: String,
) {
    outputs.is_searching.send_replace(true);

    let jobs = match repository.search_jobs(&JobFilter::query(query)).await {
        Ok(jobs) => jobs,
        Err(e) => {
            tracing::warn!(error = %e, "search failed");
            Vec::new()
        }
    };

    outputs.results.send_replace(jobs);
    outputs.is_searching.send_replace(false);
}

impl<S: JobSource + 'static> SearchViewModel<S> {
    pub fn new(repository: Arc<JobRepository<S>>, debounce: Duration) -> Self {
        let vm = Self {
            repository,
            query: watch::Sender::new(String::new()),
            outputs: Arc::new(SearchOutputs {
                results: watch::Sender::new(Vec::new()),
                is_searching: watch::Sender::new(false),
            }),
            scope: ViewModelScope::new(),
        };
        vm.setup_debounced_search(debounce);
        vm
    }

    fn setup_debounced_search(&self, debounce: Duration) {
        let input = self.query.subscribe();
        let repository = self.repository.clone();
        let outputs = self.outputs.clone();
        let token = self.scope.token();

        self.scope.launch(debounce_queries(input, debounce, move |query| {
            launch_in(
                &token,
                perform_search(repository.clone(), outputs.clone(), query),
            );
            async {}
        }));
    }

    pub fn search_query(&self) -> watch::Receiver<String> {
        self.query.subscribe()
    }

    pub fn search_results(&self) -> watch::Receiver<Vec<Job>> {
        self.outputs.results.subscribe()
    }

    pub fn is_searching(&self) -> watch::Receiver<bool> {
        self.outputs.is_searching.subscribe()
    }

    pub fn recent_searches(&self) -> watch::Receiver<Vec<SearchHistoryEntry>> {
        self.repository.store().watch_recent_searches()
    }

    /// Every keystroke lands here; searches fire once typing settles.
    pub fn on_search_query_change(&self, query: &str) {
        self.query.send_replace(query.to_string());
    }

    /// Explicit search: recorded in the history and issued immediately.
    pub fn on_search_triggered(&self, query: &str) -> Option<JoinHandle<()>> {
        if query.is_empty() {
            return None;
        }

        if let Err(e) = self.repository.store().insert_search(query) {
            tracing::warn!(error = %e, "failed to record search history");
        }

        Some(self.scope.launch(perform_search(
            self.repository.clone(),
            self.outputs.clone(),
            query.to_string(),
        )))
    }

    pub fn delete_search_history(&self, entry: &SearchHistoryEntry) -> AppResult<()> {
        self.repository.store().delete_search(entry.id)
    }

    pub fn delete_search_by_query(&self, query: &str) -> AppResult<()> {
        self.repository.store().delete_search_by_query(query)
    }

    pub fn clear_search_history(&self) -> AppResult<()> {
        self.repository.store().clear_all_searches()
    }
}
