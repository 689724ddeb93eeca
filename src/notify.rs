//! Transient toast notifications
//!
//! A toast is visible for a fixed time, then enters a short leaving phase
//! (the slide-out) and is removed. Expiry runs on its own tokio task per
//! toast; outside a runtime toasts simply stay until read.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, info};

/// Toast flavour
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "check-circle",
            NotificationKind::Error => "times-circle",
            NotificationKind::Info => "info-circle",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            NotificationKind::Success => "#38a169",
            NotificationKind::Error => "#e53e3e",
            NotificationKind::Info => "#2d5aa0",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Info => write!(f, "info"),
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastPhase {
    Visible,
    Leaving,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub icon: &'static str,
    pub color: &'static str,
    pub created_at: DateTime<Utc>,
    pub phase: ToastPhase,
}

#[derive(Debug, Default)]
struct ToastList {
    next_id: u64,
    toasts: Vec<Notification>,
}

/// Cloneable handle to the shared toast list
#[derive(Debug, Clone)]
pub struct Notifier {
    inner: Arc<Mutex<ToastList>>,
    visible_for: Duration,
    exit_for: Duration,
}

impl Notifier {
    pub fn new(visible_for: Duration, exit_for: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ToastList::default())),
            visible_for,
            exit_for,
        }
    }

    fn list(&self) -> MutexGuard<'_, ToastList> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Show a toast and schedule its exit. Returns the toast id.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let message = message.into();
        info!(kind = %kind, "{}", message);

        let id = {
            let mut list = self.list();
            list.next_id += 1;
            let id = list.next_id;
            list.toasts.push(Notification {
                id,
                message,
                kind,
                icon: kind.icon(),
                color: kind.color(),
                created_at: Utc::now(),
                phase: ToastPhase::Visible,
            });
            id
        };

        if let Ok(runtime) = tokio::runtime::Handle::try_current() {
            let notifier = self.clone();
            runtime.spawn(async move {
                tokio::time::sleep(notifier.visible_for).await;
                notifier.set_phase(id, ToastPhase::Leaving);
                tokio::time::sleep(notifier.exit_for).await;
                notifier.remove(id);
            });
        }

        id
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.notify(message, NotificationKind::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.notify(message, NotificationKind::Success)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.notify(message, NotificationKind::Error)
    }

    /// Toasts currently on screen, oldest first
    pub fn active(&self) -> Vec<Notification> {
        self.list().toasts.clone()
    }

    fn set_phase(&self, id: u64, phase: ToastPhase) {
        if let Some(toast) = self.list().toasts.iter_mut().find(|t| t.id == id) {
            toast.phase = phase;
        }
    }

    fn remove(&self, id: u64) {
        self.list().toasts.retain(|t| t.id != id);
        debug!(id, "Toast removed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notifier() -> Notifier {
        Notifier::new(Duration::from_millis(3_000), Duration::from_millis(300))
    }

    #[test]
    fn test_kind_styling() {
        assert_eq!(NotificationKind::Success.icon(), "check-circle");
        assert_eq!(NotificationKind::Error.color(), "#e53e3e");
        assert_eq!(NotificationKind::Info.icon(), "info-circle");
    }

    #[test]
    fn test_ids_increase_without_runtime() {
        let n = notifier();
        let a = n.info("View Reset");
        let b = n.success("Risk Analysis Updated");
        assert!(b > a);
        assert_eq!(n.active().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_leaves_then_is_removed() {
        let n = notifier();
        n.success("Route Optimization Complete");
        assert_eq!(n.active()[0].phase, ToastPhase::Visible);

        tokio::time::sleep(Duration::from_millis(3_010)).await;
        assert_eq!(n.active()[0].phase, ToastPhase::Leaving);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert!(n.active().is_empty());
    }
}
