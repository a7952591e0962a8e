//! Transient notification toasts.

use std::time::Duration;

use leptos::{prelude::*, task};

use storefront_client::Notification;

use crate::timers;

/// A notification on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Toast {
    id: u64,
    notification: Notification,
}

/// Stack of visible notifications, each dismissed after a fixed lifetime.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Toasts {
    entries: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
    ttl_ms: i32,
}

impl Toast {
    /// CSS class and message text, for rendering.
    fn into_parts(self) -> (&'static str, String) {
        let Self { notification, .. } = self;

        (notification.css_class(), notification.message)
    }
}

impl Toasts {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
            ttl_ms: timers::timeout_millis(ttl),
        }
    }

    /// Show `notification` and schedule its removal.
    pub(crate) fn push(self, notification: Notification) {
        let id = self.enqueue(notification);

        task::spawn_local(async move {
            timers::sleep(self.ttl_ms).await;

            self.dismiss(id);
        });
    }

    fn enqueue(self, notification: Notification) -> u64 {
        let id = self.next_id.get_untracked();

        self.next_id.set(id.wrapping_add(1));
        self.entries
            .update(|entries| entries.push(Toast { id, notification }));

        id
    }

    fn dismiss(self, id: u64) {
        self.entries
            .update(|entries| entries.retain(|toast| toast.id != id));
    }
}

/// Renders the toast stack.
#[component]
pub(crate) fn NotificationStack(toasts: Toasts) -> impl IntoView {
    view! {
        <div class="notifications" role="status" aria-live="polite">
            <For
                each=move || toasts.entries.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let (class, message) = toast.into_parts();

                    view! { <div class=class>{message}</div> }
                }
            />
        </div>
    }
}
