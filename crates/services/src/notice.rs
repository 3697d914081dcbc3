//! User-facing notifications ("toasts") raised by services.
//!
//! Services never talk to the UI directly. They hand a [`Notice`] to an
//! injected [`Notifier`]; the desktop shell drains a [`NoticeQueue`] and the
//! binary can fall back to [`LogNotifier`].

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub severity: Severity,
}

impl Notice {
    #[must_use]
    pub fn success(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity: Severity::Success,
        }
    }

    #[must_use]
    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity: Severity::Error,
        }
    }

    #[must_use]
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            severity: Severity::Info,
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// In-process queue of pending notices.
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    inner: Arc<Mutex<VecDeque<Notice>>>,
}

impl NoticeQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending notice, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<Notice> {
        match self.inner.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().map_or(0, |queue| queue.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NoticeQueue {
    fn notify(&self, notice: Notice) {
        tracing::debug!(title = %notice.title, "notice queued");
        match self.inner.lock() {
            Ok(mut queue) => queue.push_back(notice),
            Err(poisoned) => poisoned.into_inner().push_back(notice),
        }
    }
}

/// Writes notices to the log instead of showing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Error => tracing::warn!(title = %notice.title, body = %notice.body, "notice"),
            Severity::Info | Severity::Success => {
                tracing::info!(title = %notice.title, body = %notice.body, "notice");
            }
        }
    }
}

/// Deliver to both notifiers, first one first.
impl<A: Notifier, B: Notifier> Notifier for (A, B) {
    fn notify(&self, notice: Notice) {
        self.0.notify(notice.clone());
        self.1.notify(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_drains_in_order() {
        let queue = NoticeQueue::new();
        queue.notify(Notice::info("first", "a"));
        queue.notify(Notice::error("second", "b"));
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained[0].title, "first");
        assert_eq!(drained[1].severity, Severity::Error);
        assert!(queue.is_empty());
    }

    #[test]
    fn clones_share_the_same_queue() {
        let queue = NoticeQueue::new();
        let handle: Arc<dyn Notifier> = Arc::new(queue.clone());
        handle.notify(Notice::success("Saved", "ok"));
        assert_eq!(queue.drain().len(), 1);
    }

    #[test]
    fn pair_delivers_to_both() {
        let first = NoticeQueue::new();
        let second = NoticeQueue::new();
        (first.clone(), second.clone()).notify(Notice::info("hi", "there"));
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
    }
}
