//! Toast Notifications
//!
//! Transient success/error messages, auto-dismissed after a short delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays on screen
pub const TOAST_DISMISS_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One transient message
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Notification channel provided via context
#[derive(Clone, Copy)]
pub struct ToastContext {
    /// Toasts currently on screen - read
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl ToastContext {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        Self {
            toasts,
            set_toasts,
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.set_toasts
            .update(|list| list.push(Toast { id, kind, message }));

        // Auto-dismiss
        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            let _ = set_toasts.try_update(|list| list.retain(|toast| toast.id != id));
        });
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the toast channel from context
pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}
