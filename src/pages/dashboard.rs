//! Dashboard Page
//!
//! The single dashboard view: alert banner, headline figures, zone boxes,
//! both charts, the live feed, and the admin panel.

use leptos::*;

use crate::components::{
    AdminPanel, AlertBanner, AnalyticsChart, DensityChart, Loading, SummaryCards, VideoFeed,
    ZoneGrid,
};
use crate::state::global::DashboardState;

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    // Flips exactly once, when the first snapshot lands
    let has_snapshot = create_memo(move |_| state.snapshot.get().is_some());

    view! {
        <div class="dashboard">
            <AlertBanner />
            <SummaryCards />

            {move || {
                if has_snapshot.get() {
                    view! {
                        <ZoneGrid />
                        <AnalyticsChart />
                        <DensityChart />
                    }
                    .into_view()
                } else {
                    view! { <Loading /> }.into_view()
                }
            }}

            <div class="panel-row">
                <VideoFeed />
                <AdminPanel />
            </div>
        </div>
    }
}
