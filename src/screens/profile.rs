use super::scope::ViewModelScope;
use crate::core::repository::JobRepository;
use crate::remote::JobSource;
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::watch;

pub struct ProfileViewModel {
    saved_jobs_count: Arc<watch::Sender<usize>>,
    recent_searches_count: usize,
    _scope: ViewModelScope,
}

impl ProfileViewModel {
    pub fn new<S: JobSource + 'static>(repository: &JobRepository<S>) -> Self {
        let saved_jobs_count = Arc::new(watch::Sender::new(repository.saved_jobs_now().len()));
        let scope = ViewModelScope::new();

        let stream = repository.saved_jobs_count();
        let sink = saved_jobs_count.clone();
        scope.launch(async move {
            let mut stream = std::pin::pin!(stream);
            while let Some(n) = stream.next().await {
                sink.send_replace(n);
            }
        });

        Self {
            saved_jobs_count,
            recent_searches_count: repository.store().recent_searches_now().len(),
            _scope: scope,
        }
    }

    pub fn saved_jobs_count(&self) -> watch::Receiver<usize> {
        self.saved_jobs_count.subscribe()
    }

    pub fn recent_searches_count(&self) -> usize {
        self.recent_searches_count
    }
}
