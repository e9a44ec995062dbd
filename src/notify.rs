//! Notifications
//!
//! Toast queue behind a copyable handle. Components call
//! `Notifier::show(message, kind)`; toasts dismiss themselves after the
//! configured duration.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::NotifyKind;

/// At most this many toasts are on screen; older ones are dropped
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub kind: NotifyKind,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u32,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>, kind: NotifyKind) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast { id, message: message.into(), kind });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Notification sink handed out through context
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl Notifier {
    pub fn new(duration_ms: u32) -> Self {
        Self { queue: RwSignal::new(ToastQueue::default()), duration_ms }
    }

    pub fn show(&self, message: impl Into<String>, kind: NotifyKind) {
        let message = message.into();
        log::debug!("[NOTIFY] {}: {}", kind.as_str(), message);
        let mut id = 0;
        self.queue.update(|q| id = q.push(message, kind));

        let queue = self.queue;
        let duration = self.duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            queue.update(|q| q.dismiss(id));
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.queue.update(|q| q.dismiss(id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push("Added to cart", NotifyKind::Success);
        let b = queue.push("Heads up", NotifyKind::Info);
        assert_ne!(a, b);

        queue.dismiss(a);
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, b);
    }

    #[test]
    fn test_oldest_dropped_past_limit() {
        let mut queue = ToastQueue::default();
        for i in 0..5 {
            queue.push(format!("toast {}", i), NotifyKind::Info);
        }
        let messages: Vec<_> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["toast 2", "toast 3", "toast 4"]);
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut queue = ToastQueue::default();
        queue.push("one", NotifyKind::Warning);
        queue.dismiss(42);
        assert_eq!(queue.toasts().len(), 1);
    }
}
