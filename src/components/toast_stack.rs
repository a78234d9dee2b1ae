//! Toast notifications overlay.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::notifications::{Notification, NotificationState};

/// Fixed stack of toasts, newest last. Click a toast to dismiss it; it also
/// disappears on its own after `toast_timeout_ms`.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let timeout_ms = expect_context::<ClientConfig>().toast_timeout_ms;

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || notifications.get().items
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    schedule_dismiss(notifications, id, timeout_ms);
                    view! {
                        <div
                            class=n.kind.css_class()
                            role="status"
                            on:click=move |_| notifications.update(|s| s.dismiss(id))
                        >
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

fn schedule_dismiss(notifications: RwSignal<NotificationState>, id: u64, timeout_ms: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(timeout_ms)).await;
        // The signal is gone if the app unmounted while we slept.
        notifications.try_update(|s| s.dismiss(id));
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notifications, id, timeout_ms);
    }
}
