//! Toast Host Component
//!
//! Renders the active toasts from the notification channel.

use leptos::prelude::*;

use crate::toast::{use_toasts, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-container">
            {move || {
                toasts
                    .toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast-success",
                            ToastKind::Error => "toast toast-error",
                        };
                        view! { <div class=class>{toast.message}</div> }
                    })
                    .collect_view()
            }}
        </div>
    }
}
