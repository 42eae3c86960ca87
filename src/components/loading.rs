//! Loading Component
//!
//! Spinner shown until the first snapshot arrives.

use leptos::*;

/// Full-width loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading-wrap">
            <div class="loading-spinner"></div>
            <p>"Connecting to backend..."</p>
        </div>
    }
}
