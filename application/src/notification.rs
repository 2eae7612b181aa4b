//! Notification channel
//!
//! Single-slot holder of the active [`Notification`]. Each new notification
//! overwrites the previous one. Readers subscribe through a
//! `tokio::sync::watch` receiver; the feed controller is the only writer.
//!
//! With a time-to-live configured, every raised notification is dismissed
//! automatically once the TTL elapses, unless a newer one replaced it first.

use echoq_domain::Notification;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::watch;
use tracing::debug;

#[derive(Clone)]
pub struct NotificationChannel {
    tx: Arc<watch::Sender<Notification>>,
    generation: Arc<AtomicU64>,
    ttl: Option<Duration>,
}

impl NotificationChannel {
    /// Channel without auto-dismiss
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Notification::default());
        Self {
            tx: Arc::new(tx),
            generation: Arc::new(AtomicU64::new(0)),
            ttl: None,
        }
    }

    /// Dismiss each notification automatically after `ttl`
    pub fn with_auto_dismiss(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Publish a notification, replacing the current one
    pub fn set_alert(&self, notification: Notification) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(
            "notification #{}: {} {}",
            generation,
            notification.status.as_str(),
            notification.text
        );
        let show = notification.show;
        self.tx.send_replace(notification);

        if let (true, Some(ttl)) = (show, self.ttl)
            && let Ok(handle) = tokio::runtime::Handle::try_current()
        {
            let channel = self.clone();
            handle.spawn(async move {
                tokio::time::sleep(ttl).await;
                channel.dismiss_if_current(generation);
            });
        }
    }

    /// Hide the current notification
    pub fn dismiss(&self) {
        self.tx.send_if_modified(|current| {
            if current.show {
                current.show = false;
                true
            } else {
                false
            }
        });
    }

    fn dismiss_if_current(&self, generation: u64) {
        if self.generation.load(Ordering::SeqCst) == generation {
            self.dismiss();
        }
    }

    /// Snapshot of the current notification
    pub fn current(&self) -> Notification {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Notification> {
        self.tx.subscribe()
    }
}

impl Default for NotificationChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echoq_domain::NotificationStatus;

    #[test]
    fn test_last_writer_wins() {
        let channel = NotificationChannel::new();
        channel.set_alert(Notification::success("first"));
        channel.set_alert(Notification::error("second"));

        let current = channel.current();
        assert_eq!(current.text, "second");
        assert_eq!(current.status, NotificationStatus::Error);
        assert!(current.show);
    }

    #[test]
    fn test_manual_dismiss() {
        let channel = NotificationChannel::new();
        channel.set_alert(Notification::success("done"));
        channel.dismiss();
        assert!(!channel.current().show);
        assert_eq!(channel.current().text, "done");
    }

    #[tokio::test]
    async fn test_subscriber_sees_update() {
        let channel = NotificationChannel::new();
        let mut rx = channel.subscribe();
        channel.set_alert(Notification::error("oops"));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().text, "oops");
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_after_ttl() {
        let channel = NotificationChannel::new().with_auto_dismiss(Duration::from_secs(5));
        channel.set_alert(Notification::success("saved"));

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert!(channel.current().show);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(!channel.current().show);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_notification_survives_older_timer() {
        let channel = NotificationChannel::new().with_auto_dismiss(Duration::from_secs(5));
        channel.set_alert(Notification::success("first"));

        tokio::time::sleep(Duration::from_secs(3)).await;
        channel.set_alert(Notification::error("second"));

        // first timer fires at t=5 and must not hide "second"
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(channel.current().show);
        assert_eq!(channel.current().text, "second");

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(!channel.current().show);
    }
}
