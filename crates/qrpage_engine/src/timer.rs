use std::future::Future;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A one-shot timer task that is aborted when the handle is dropped.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    pub fn spawn<F, Fut>(runtime: &Handle, delay: Duration, on_fire: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            on_fire().await;
        });
        Self { task }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Holds at most one pending timer; restarting replaces (and cancels) the previous one.
#[derive(Debug, Default)]
pub struct DebounceTimer {
    pending: Option<TimerHandle>,
}

impl DebounceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn restart<F, Fut>(&mut self, runtime: &Handle, delay: Duration, on_fire: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.pending = Some(TimerHandle::spawn(runtime, delay, on_fire));
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::runtime::Handle;
    use tokio::sync::mpsc;

    use super::DebounceTimer;

    const WINDOW: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_window() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = DebounceTimer::new();

        timer.restart(&Handle::current(), WINDOW, move || async move {
            let _ = tx.send("settled");
        });

        tokio::time::sleep(WINDOW + Duration::from_millis(1)).await;
        assert_eq!(rx.recv().await, Some("settled"));
    }

    #[tokio::test(start_paused = true)]
    async fn restart_cancels_previous_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = DebounceTimer::new();

        let first = tx.clone();
        timer.restart(&Handle::current(), WINDOW, move || async move {
            let _ = first.send(1);
        });
        tokio::time::sleep(Duration::from_millis(200)).await;
        timer.restart(&Handle::current(), WINDOW, move || async move {
            let _ = tx.send(2);
        });

        tokio::time::sleep(WINDOW * 2).await;
        assert_eq!(rx.recv().await, Some(2));
        // Both senders are gone now; nothing else was queued.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_timer_prevents_firing() {
        let (tx, mut rx) = mpsc::unbounded_channel::<()>();
        let mut timer = DebounceTimer::new();

        timer.restart(&Handle::current(), WINDOW, move || async move {
            let _ = tx.send(());
        });
        drop(timer);

        tokio::time::sleep(WINDOW * 2).await;
        assert_eq!(rx.recv().await, None);
    }
}
