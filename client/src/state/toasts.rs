//! Transient success/error notifications.
//!
//! DESIGN
//! ======
//! Non-view code reports outcomes through the `Notifier` trait; the app
//! installs a `SignalNotifier` that feeds a `ToastQueue` signal rendered by
//! the toast host. Tests substitute a recording notifier.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

/// Maximum number of toasts visible at once; older ones are dropped.
pub const MAX_VISIBLE_TOASTS: usize = 5;

/// Auto-dismiss delay in the browser.
pub const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier class for the toast banner.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast--info",
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

/// A notification as requested by the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: ToastKind::Info, message: message.into() }
    }
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// A queued toast with its dismissal id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueuedToast {
    pub id: u64,
    pub toast: Toast,
}

/// Visible toasts, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    pub items: Vec<QueuedToast>,
    next_id: u64,
}

impl ToastQueue {
    /// Append a toast and return its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(QueuedToast { id, toast });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }
}

/// Notifier backed by the app-wide toast signal.
#[derive(Clone, Copy)]
pub struct SignalNotifier {
    queue: RwSignal<ToastQueue>,
}

impl SignalNotifier {
    pub fn new(queue: RwSignal<ToastQueue>) -> Self {
        Self { queue }
    }
}

impl Notifier for SignalNotifier {
    fn notify(&self, toast: Toast) {
        let Some(id) = self.queue.try_update(|q| q.push(toast)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let queue = self.queue;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
                let _ = queue.try_update(|q| q.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
