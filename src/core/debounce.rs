//! Debounced, de-duplicated query pipeline for search-as-you-type.

use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time;

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Feed every settled value of `input` to `on_query`.
///
/// A value settles once `quiet` passes without a further change. Settled
/// values equal to the previous settled value are dropped, and so are empty
/// ones. The current value at start-up counts as a change. Returns when the
/// sender side is dropped.
pub async fn debounce_queries<F, Fut>(
    mut input: watch::Receiver<String>,
    quiet: Duration,
    mut on_query: F,
) where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut last: Option<String> = None;
    input.mark_changed();

    loop {
        if input.changed().await.is_err() {
            return;
        }

        // Restart the quiet period on every change.
        let closed = loop {
            match time::timeout(quiet, input.changed()).await {
                Ok(Ok(())) => continue,
                Ok(Err(_)) => break true,
                Err(_) => break false,
            }
        };

        let value = input.borrow_and_update().clone();
        if last.as_deref() != Some(value.as_str()) {
            last = Some(value.clone());
            if !value.is_empty() {
                tracing::debug!(query = %value, "debounced query settled");
                on_query(value).await;
            }
        }

        if closed {
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[tokio::test(start_paused = true)]
    async fn only_settled_distinct_values_pass() {
        let (tx, rx) = watch::channel(String::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let task = tokio::spawn(debounce_queries(rx, DEFAULT_QUIET_PERIOD, move |q| {
            let sink = sink.clone();
            async move { sink.lock().unwrap().push(q) }
        }));

        // Keystrokes 100ms apart never settle.
        for q in ["r", "ru", "rus", "rust"] {
            tx.send_replace(q.to_string());
            time::sleep(Duration::from_millis(100)).await;
        }
        time::sleep(Duration::from_millis(400)).await;

        // Same value again: suppressed.
        tx.send_replace("rust".to_string());
        time::sleep(Duration::from_millis(400)).await;

        // Cleared input: not forwarded.
        tx.send_replace(String::new());
        time::sleep(Duration::from_millis(400)).await;

        tx.send_replace("go".to_string());
        time::sleep(Duration::from_millis(400)).await;

        drop(tx);
        task.await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec!["rust".to_string(), "go".to_string()]);
    }
}
