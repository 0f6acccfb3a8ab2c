//! Toast stack fed by the shared notifier.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hooks and the session-expiry interceptor push into the queue through
//! `SignalNotifier`; this component only renders and dismisses.

use leptos::prelude::*;

use crate::state::toasts::ToastQueue;

/// Fixed-position stack of visible toasts. Clicking a toast dismisses it.
#[component]
pub fn ToastHost() -> impl IntoView {
    let queue = expect_context::<RwSignal<ToastQueue>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || queue.get().items
                key=|item| item.id
                children=move |item| {
                    let id = item.id;
                    let class = format!("toast {}", item.toast.kind.class());
                    view! {
                        <div class=class on:click=move |_| queue.update(|q| q.dismiss(id))>
                            {item.toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
