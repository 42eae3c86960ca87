//! Density Chart Panel
//!
//! Bubble canvas showing the current occupancy of each zone at a glance.

use leptos::*;

use crate::charts::{CanvasBubbleChart, ChartView};
use crate::render;
use crate::state::global::DashboardState;

#[component]
pub fn DensityChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let model = state
            .snapshot
            .get()
            .map(|snapshot| render::bubble_chart_model(&snapshot))
            .unwrap_or_default();
        if let Some(canvas) = canvas_ref.get() {
            CanvasBubbleChart::new((*canvas).clone()).update(&model);
        }
    });

    view! {
        <section class="chart-card">
            <h2>"Crowd Density Heatmap"</h2>
            <canvas node_ref=canvas_ref width="800" height="260"></canvas>
        </section>
    }
}
