// Work-list loader.
// One activation fetches the works collection at most twice: a first attempt,
// a fixed 800 ms wait, and a single retry. Cancellation is cooperative and is
// checked after every suspension point, so a cancelled activation produces no
// observable effect at all.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::time::sleep;

use crate::api::WorkItem;
use crate::error::Result;

/// Fixed delay between the first failure and the single retry.
/// Deliberately not backoff: one bounded retry is all this loader does.
pub const RETRY_DELAY: Duration = Duration::from_millis(800);

/// Cooperative cancellation flag shared between an activation and its owner.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Loading state of a works collection, as observed by a view.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    /// Successful load. `Ready(vec![])` means a genuinely empty gallery,
    /// which is not the same thing as `Failed`.
    Ready(Vec<WorkItem>),
    /// Both attempts failed; the collection is conceptually empty.
    Failed,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed)
    }

    /// The loaded collection; empty unless `Ready`.
    pub fn works(&self) -> &[WorkItem] {
        match self {
            LoadState::Ready(items) => items,
            _ => &[],
        }
    }
}

/// Terminal outcome of an activation that ran to completion.
/// A cancelled activation has no outcome at all.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Ready(Vec<WorkItem>),
    Failed,
}

impl LoadOutcome {
    pub fn into_state(self) -> LoadState {
        match self {
            LoadOutcome::Ready(items) => LoadState::Ready(items),
            LoadOutcome::Failed => LoadState::Failed,
        }
    }
}

/// Drive one activation of the loader.
///
/// Issues the fetch once, and on failure exactly once more after
/// [`RETRY_DELAY`]. Transport errors never escape: the result is `Ready` or
/// `Failed`. Returns `None` without emitting anything if the token is
/// cancelled, no matter when the in-flight response eventually arrives.
pub async fn load_works<F, Fut>(fetch: F, cancel: &CancelToken) -> Option<LoadOutcome>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<Vec<WorkItem>>>,
{
    if cancel.is_cancelled() {
        return None;
    }

    let first = fetch().await;
    if cancel.is_cancelled() {
        return None;
    }
    match first {
        Ok(items) => return Some(LoadOutcome::Ready(items)),
        Err(err) => tracing::warn!("work list load failed, retrying once: {err}"),
    }

    sleep(RETRY_DELAY).await;
    if cancel.is_cancelled() {
        return None;
    }

    let second = fetch().await;
    if cancel.is_cancelled() {
        return None;
    }
    match second {
        Ok(items) => Some(LoadOutcome::Ready(items)),
        Err(err) => {
            tracing::warn!("work list load failed after retry: {err}");
            Some(LoadOutcome::Failed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EaselError;
    use std::sync::atomic::AtomicUsize;
    use tokio::time::Instant;

    fn work(id: &str) -> WorkItem {
        WorkItem {
            id: id.to_string(),
            title: format!("Work {id}"),
            description: String::new(),
            tag: "Sketch".to_string(),
            year: "2025".to_string(),
            image_url: format!("http://localhost:8000/uploads/{id}.png"),
            created_at: None,
        }
    }

    fn unreachable_backend() -> EaselError {
        EaselError::Other("connection refused".to_string())
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_success_makes_one_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let token = CancelToken::new();

        let counter = calls.clone();
        let outcome = load_works(
            move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(vec![work("w1"), work("w2")])
                }
            },
            &token,
        )
        .await;

        assert_eq!(outcome, Some(LoadOutcome::Ready(vec![work("w1"), work("w2")])));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_then_empty_success_waits_and_retries() {
        let calls = Arc::new(AtomicUsize::new(0));
        let token = CancelToken::new();
        let started = Instant::now();

        let counter = calls.clone();
        let outcome = load_works(
            move || {
                let counter = counter.clone();
                async move {
                    if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                        Err(unreachable_backend())
                    } else {
                        Ok(Vec::new())
                    }
                }
            },
            &token,
        )
        .await;

        // An empty retry result is still a successful load.
        assert_eq!(outcome, Some(LoadOutcome::Ready(Vec::new())));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(started.elapsed() >= RETRY_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_two_failures_settle_in_failed() {
        let calls = Arc::new(AtomicUsize::new(0));
        let token = CancelToken::new();

        let counter = calls.clone();
        let outcome = load_works(
            move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Err(unreachable_backend())
                }
            },
            &token,
        )
        .await;

        assert_eq!(outcome, Some(LoadOutcome::Failed));
        // Exactly one retry, never a third attempt.
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(LoadOutcome::Failed.into_state().works().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_start_makes_no_calls() {
        let calls = Arc::new(AtomicUsize::new(0));
        let token = CancelToken::new();
        token.cancel();

        let counter = calls.clone();
        let outcome = load_works(
            move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(Vec::new())
                }
            },
            &token,
        )
        .await;

        assert_eq!(outcome, None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_mid_flight_discards_late_response() {
        let calls = Arc::new(AtomicUsize::new(0));
        let token = CancelToken::new();

        let counter = calls.clone();
        let task_token = token.clone();
        let handle = tokio::spawn(async move {
            load_works(
                move || {
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        // Response arrives long after the view went away.
                        sleep(Duration::from_secs(5)).await;
                        Ok(vec![work("stale")])
                    }
                },
                &task_token,
            )
            .await
        });

        sleep(Duration::from_millis(100)).await;
        token.cancel();
        token.cancel(); // cancelling twice is safe

        let outcome = handle.await.unwrap();
        assert_eq!(outcome, None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_during_retry_wait_skips_second_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let token = CancelToken::new();

        let counter = calls.clone();
        let task_token = token.clone();
        let handle = tokio::spawn(async move {
            load_works(
                move || {
                    let counter = counter.clone();
                    async move {
                        counter.fetch_add(1, Ordering::SeqCst);
                        Err(unreachable_backend())
                    }
                },
                &task_token,
            )
            .await
        });

        // Cancel while the loader is sitting in the 800 ms wait.
        sleep(Duration::from_millis(200)).await;
        token.cancel();

        let outcome = handle.await.unwrap();
        assert_eq!(outcome, None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_activations_stay_independent() {
        // Two views loading at once own separate tokens and outcomes;
        // neither run can disturb the other.
        let failing_token = CancelToken::new();
        let failing = tokio::spawn(async move {
            load_works(
                || async { Err(unreachable_backend()) },
                &failing_token,
            )
            .await
        });

        let succeeding_token = CancelToken::new();
        let succeeding = tokio::spawn(async move {
            load_works(
                || async {
                    sleep(Duration::from_millis(300)).await;
                    Ok(vec![work("w1")])
                },
                &succeeding_token,
            )
            .await
        });

        assert_eq!(
            succeeding.await.unwrap(),
            Some(LoadOutcome::Ready(vec![work("w1")]))
        );
        assert_eq!(failing.await.unwrap(), Some(LoadOutcome::Failed));
    }

    #[test]
    fn test_ready_empty_is_not_failed() {
        let ready = LoadState::Ready(Vec::new());
        assert_ne!(ready, LoadState::Failed);
        assert!(!ready.is_failed());
        assert!(ready.works().is_empty());
    }
}
