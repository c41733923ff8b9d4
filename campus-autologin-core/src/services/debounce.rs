//! Single-slot debounce timer

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Holds at most one scheduled task.
///
/// Rescheduling aborts the waiting task and arms a new one. Once the delay has
/// elapsed the task is handed off to its own tokio task, so a commit that has
/// already started is never aborted by a later reschedule.
#[derive(Debug, Default)]
pub struct DebounceTimer {
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl DebounceTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the pending task (if any) and schedule `task` after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn reschedule<F>(&self, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut slot = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(task);
        }));
    }

    /// Drop the pending task without running it.
    pub fn cancel(&self) {
        let mut slot = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.take() {
            previous.abort();
        }
    }

    /// Whether a task is still waiting for its delay to elapse.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    fn counting_task(counter: &Arc<AtomicUsize>) -> impl Future<Output = ()> + Send + 'static {
        let counter = Arc::clone(counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_pending_task() {
        let timer = DebounceTimer::new();
        let fired = Arc::new(AtomicUsize::new(0));

        for _ in 0..5 {
            timer.reschedule(Duration::from_millis(500), counting_task(&fired));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(timer.is_pending());
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_firing() {
        let timer = DebounceTimer::new();
        let fired = Arc::new(AtomicUsize::new(0));

        timer.reschedule(Duration::from_millis(500), counting_task(&fired));
        timer.cancel();
        tokio::time::sleep(Duration::from_secs(1)).await;

        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(!timer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_started_task_survives_reschedule() {
        let timer = DebounceTimer::new();
        let finished = Arc::new(AtomicUsize::new(0));

        let done = Arc::clone(&finished);
        timer.reschedule(Duration::from_millis(500), async move {
            tokio::time::sleep(Duration::from_millis(300)).await;
            done.fetch_add(1, Ordering::SeqCst);
        });
        // 第一次任务已开始执行（600ms 时处于 300ms 的写入中）
        tokio::time::sleep(Duration::from_millis(600)).await;
        timer.reschedule(Duration::from_millis(500), counting_task(&finished));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(finished.load(Ordering::SeqCst), 2);
    }
}
