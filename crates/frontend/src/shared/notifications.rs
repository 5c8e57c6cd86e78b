//! Toast notifications.
//!
//! [`NotificationService`] is provided through context by the root component;
//! forms push into it, and [`Toaster`] renders the queue and dismisses each
//! toast after [`TOAST_TIMEOUT_MS`].

use leptos::prelude::*;
use uuid::Uuid;

pub const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "toast toast--success",
            NoticeKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notice>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    fn push(&self, kind: NoticeKind, message: String) {
        let notice = Notice {
            id: Uuid::new_v4(),
            kind,
            message,
        };
        // try_update: the service can outlive the view it was created in
        let _ = self.items.try_update(|items| items.push(notice));
    }

    pub fn dismiss(&self, id: Uuid) {
        let _ = self.items.try_update(|items| items.retain(|n| n.id != id));
    }

    /// Current queue (tracked)
    pub fn items(&self) -> Vec<Notice> {
        self.items.get()
    }

    pub fn snapshot(&self) -> Vec<Notice> {
        self.items.get_untracked()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let service =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    view! {
        <div class="toaster">
            <For
                each=move || service.items()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
                        service.dismiss(id);
                    });
                    view! {
                        <div class=notice.kind.class() on:click=move |_| service.dismiss(id)>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
