//! Task scope tied to a screen's lifetime: tasks launched through it are
//! cancelled when the owning view-model is dropped.

use std::future::Future;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub struct ViewModelScope {
    cancel: CancellationToken,
}

impl Default for ViewModelScope {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewModelScope {
    pub fn new() -> Self {
        Self {
            cancel: CancellationToken::new(),
        }
    }

    /// Token for tasks that need to launch follow-up work in the same scope.
    pub fn token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn launch<F>(&self, fut: F) -> JoinHandle<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        launch_in(&self.cancel, fut)
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for ViewModelScope {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Spawn `fut`, abandoning it as soon as `cancel` fires.
pub fn launch_in<F>(cancel: &CancellationToken, fut: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let cancel = cancel.clone();
    tokio::spawn(async move {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::trace!("screen task cancelled");
            }
            _ = fut => {}
        }
    })
}
