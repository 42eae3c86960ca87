//! Toast Notifications
//!
//! Success, error, and informational messages, stacked in a corner and
//! auto-cleared by the state helpers that set them.

use leptos::*;

use crate::state::global::DashboardState;

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
    Info,
}

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="toast-stack">
            {move || {
                state.success.get().map(|msg| {
                    view! { <ToastMessage message=msg variant=ToastVariant::Success /> }
                })
            }}
            {move || {
                state.error.get().map(|msg| {
                    view! { <ToastMessage message=msg variant=ToastVariant::Error /> }
                })
            }}
            {move || {
                state.info.get().map(|msg| {
                    view! { <ToastMessage message=msg variant=ToastVariant::Info /> }
                })
            }}
        </div>
    }
}

#[component]
fn ToastMessage(message: String, variant: ToastVariant) -> impl IntoView {
    let (icon, class) = match variant {
        ToastVariant::Success => ("✓", "toast toast-success"),
        ToastVariant::Error => ("✕", "toast toast-error"),
        ToastVariant::Info => ("ℹ", "toast toast-info"),
    };

    view! {
        <div class=class>
            <span class="toast-icon">{icon}</span>
            <span class="toast-text">{message}</span>
        </div>
    }
}
