//! Summary Cards
//!
//! Headline figures above the zone grid: total crowd count and the alert
//! threshold currently configured on the backend.

use leptos::*;

use crate::state::global::DashboardState;

/// Total and threshold stat cards, read straight from the snapshot
#[component]
pub fn SummaryCards() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let total = create_memo(move |_| {
        state
            .snapshot
            .get()
            .map(|snapshot| snapshot.total)
            .unwrap_or(0)
    });
    let threshold = create_memo(move |_| {
        state
            .snapshot
            .get()
            .map(|snapshot| snapshot.threshold)
            .unwrap_or(0)
    });

    view! {
        <div class="stats-grid">
            <StatCard label="Total Count" value=Signal::derive(move || total.get().to_string()) />
            <StatCard
                label="Alert Threshold"
                value=Signal::derive(move || threshold.get().to_string())
            />
        </div>
    }
}

/// Single headline figure
#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class="stat-value">{move || value.get()}</span>
        </div>
    }
}
