//! Chart Views
//!
//! Canvas-backed chart rendering behind a small view interface. The model
//! builders live in [`crate::render`]; the types here only know how to put a
//! prepared model on screen, so the drawing backend can change without
//! touching the render rules.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub mod bubble;
pub mod line;

pub use bubble::CanvasBubbleChart;
pub use line::CanvasLineChart;

/// A chart that is fully redrawn from a prepared model. Updates clear and
/// repaint; there are no animated transitions between snapshots.
pub trait ChartView {
    type Model;

    fn update(&self, model: &Self::Model);
}

/// Chart background, matching the dashboard panel color
pub(crate) const CHART_BG: &str = "#1f2937";
/// Grid line color
pub(crate) const GRID_COLOR: &str = "#374151";
/// Axis label color
pub(crate) const AXIS_COLOR: &str = "#9ca3af";
/// Axis label font
pub(crate) const AXIS_FONT: &str = "12px sans-serif";

/// Acquire the 2D context for a chart canvas
pub(crate) fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => None,
    }
}

/// Clear the full canvas to the chart background
pub(crate) fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&CHART_BG.into());
    ctx.fill_rect(0.0, 0.0, width, height);
}

/// Centered placeholder for a chart with nothing to draw yet
pub(crate) fn draw_placeholder(
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    message: &str,
) {
    ctx.set_fill_style(&AXIS_COLOR.into());
    ctx.set_font("16px sans-serif");
    let _ = ctx.fill_text(message, width / 2.0 - 70.0, height / 2.0);
}
