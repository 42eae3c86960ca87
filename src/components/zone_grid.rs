//! Zone Grid
//!
//! Per-zone occupancy boxes in ascending zone order. The grid is rebuilt
//! from scratch on every snapshot; boxes are never keyed or reused, so a
//! changed zone set can never leave a stale box behind.

use leptos::*;

use crate::render;
use crate::state::global::DashboardState;

#[component]
pub fn ZoneGrid() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="zone-grid">
            {move || {
                let snapshot = state.snapshot.get().unwrap_or_default();
                render::zone_boxes(&snapshot)
                    .into_iter()
                    .map(|zone| {
                        view! {
                            <div class=format!("zone-box {}", zone.color.css_class)>
                                <h4>{format!("Zone {} Count", zone.id)}</h4>
                                <h2>{render::pad_count(zone.count)}</h2>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
