//! Analytics Chart Panel
//!
//! Time-series canvas with one line per zone over the snapshot history,
//! plus a legend naming each series.

use leptos::*;

use crate::charts::{CanvasLineChart, ChartView};
use crate::render;
use crate::state::global::DashboardState;

#[component]
pub fn AnalyticsChart() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Full redraw on every snapshot; no transitions at 1 Hz
    create_effect(move |_| {
        let model = state
            .snapshot
            .get()
            .map(|snapshot| render::line_chart_model(&snapshot))
            .unwrap_or_default();
        if let Some(canvas) = canvas_ref.get() {
            CanvasLineChart::new((*canvas).clone()).update(&model);
        }
    });

    view! {
        <section class="chart-card">
            <h2>"Real Time Crowd Analytics Over Time"</h2>
            <canvas node_ref=canvas_ref width="800" height="360"></canvas>
            <ChartLegend />
        </section>
    }
}

/// Legend entry per zone, in the same order and colors as the series
#[component]
fn ChartLegend() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div class="chart-legend">
            {move || {
                let snapshot = state.snapshot.get().unwrap_or_default();
                render::zone_boxes(&snapshot)
                    .into_iter()
                    .map(|zone| {
                        view! {
                            <span class="legend-entry">
                                <span
                                    class="legend-dot"
                                    style=format!("background-color: {}", zone.color.stroke)
                                ></span>
                                {format!("Zone {}", zone.id)}
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
