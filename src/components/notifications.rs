//! Notification Components
//!
//! Transient toast notifications for admin actions. Each toast is
//! appended to the stack and removed again after a fixed delay;
//! concurrent toasts simply stack.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays on screen
pub const NOTIFICATION_TIMEOUT_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub kind: NotificationKind,
}

/// Toast dispatcher provided via context
#[derive(Clone, Copy)]
pub struct Notifier {
    notifications: ReadSignal<Vec<Notification>>,
    set_notifications: WriteSignal<Vec<Notification>>,
    next_id: StoredValue<u32>,
}

impl Notifier {
    pub fn new() -> Self {
        let (notifications, set_notifications) = signal(Vec::new());
        Self {
            notifications,
            set_notifications,
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: &str) {
        self.push(message, NotificationKind::Success);
    }

    pub fn error(&self, message: &str) {
        self.push(message, NotificationKind::Error);
    }

    fn push(&self, message: &str, kind: NotificationKind) {
        let mut id = 0;
        self.next_id.update_value(|n| {
            *n += 1;
            id = *n;
        });
        self.set_notifications.update(|list| {
            list.push(Notification {
                id,
                message: message.to_string(),
                kind,
            })
        });

        let set_notifications = self.set_notifications;
        spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
            set_notifications.update(|list| list.retain(|n| n.id != id));
        });
    }
}

/// Renders the active toast stack
#[component]
pub fn Notifications() -> impl IntoView {
    let notifier = use_context::<Notifier>().expect("Notifier should be provided");

    view! {
        <div class="notification-stack">
            <For
                each=move || notifier.notifications.get()
                key=|n| n.id
                children=|n| {
                    view! {
                        <div class=format!("notification {}", n.kind.css_class())>
                            {n.message.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
