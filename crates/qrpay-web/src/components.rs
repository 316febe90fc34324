//! UI Components

use std::time::Duration;

use leptos::prelude::*;

use crate::money::format_cents;

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

/// Transient notifications, provided as context by the app root
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn show(&self, title: &str, description: &str, variant: ToastVariant) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.items.update(|items| {
            items.push(Toast {
                id,
                title: title.into(),
                description: description.into(),
                variant,
            });
        });

        let toasts = *self;
        set_timeout(move || toasts.dismiss(id), TOAST_DURATION);
    }

    pub fn success(&self, title: &str, description: &str) {
        self.show(title, description, ToastVariant::Default);
    }

    pub fn error(&self, title: &str, description: &str) {
        self.show(title, description, ToastVariant::Destructive);
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|t| t.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_default()
}

/// Renders the active toasts
#[component]
pub fn ToastRegion() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toasts">
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast-destructive",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class on:click=move |_| toasts.dismiss(id)>
                            <strong>{toast.title}</strong>
                            <p>{toast.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Amount and optional description of a payment
#[component]
pub fn PaymentSummary(amount: i64, description: Option<String>) -> impl IntoView {
    view! {
        <div class="summary">
            <p><strong>"Amount: "</strong>{format_cents(amount)}</p>
            {description
                .filter(|d| !d.is_empty())
                .map(|d| view! { <p><strong>"Description: "</strong>{d}</p> })}
        </div>
    }
}
