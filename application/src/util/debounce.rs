//! Debounce utility
//!
//! Collapses a burst of values into the last one, delivered once the input
//! has been quiet for the configured delay. Each push cancels the pending
//! timer; a value already delivered is never taken back.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Delays values until a quiet period has elapsed since the last push.
///
/// Settled values are sent to the channel given at construction. Must be
/// used from within a tokio runtime.
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<CancellationToken>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<T>) -> Self {
        Self {
            delay,
            tx,
            pending: None,
        }
    }

    /// Schedule `value`, superseding any value still waiting
    pub fn push(&mut self, value: T) {
        self.cancel();

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let tx = self.tx.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    let _ = tx.send(value);
                }
            }
        });
        self.pending = Some(token);
    }

    /// Drop the pending value, if any
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_burst_delivers_only_latest() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500), tx);

        for term in ["w", "wh", "wha", "what"] {
            debouncer.push(term.to_string());
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        assert_eq!(rx.recv().await.as_deref(), Some("what"));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_full_quiet_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500), tx);

        let start = Instant::now();
        debouncer.push(1u32);
        assert_eq!(rx.recv().await, Some(1));
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_pushes_each_delivered() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500), tx);

        debouncer.push("a");
        tokio::time::sleep(Duration::from_millis(600)).await;
        debouncer.push("b");
        tokio::time::sleep(Duration::from_millis(600)).await;

        assert_eq!(rx.try_recv().ok(), Some("a"));
        assert_eq!(rx.try_recv().ok(), Some("b"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500), tx);

        debouncer.push("gone");
        debouncer.cancel();
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }
}
