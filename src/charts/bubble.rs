//! Density Chart
//!
//! Canvas bubble chart: one bubble per zone, radius proportional to
//! occupancy with a fixed floor. Axes stay hidden; the horizontal position
//! is the zone's sorted rank and every bubble sits on the vertical center.

use std::f64::consts::PI;

use web_sys::HtmlCanvasElement;

use crate::render::BubbleChartModel;

use super::{clear, context_2d, draw_placeholder, ChartView, AXIS_COLOR, AXIS_FONT};

/// Canvas-backed bubble chart.
pub struct CanvasBubbleChart {
    canvas: HtmlCanvasElement,
}

impl CanvasBubbleChart {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl ChartView for CanvasBubbleChart {
    type Model = BubbleChartModel;

    fn update(&self, model: &BubbleChartModel) {
        let ctx = match context_2d(&self.canvas) {
            Some(ctx) => ctx,
            None => return,
        };

        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        clear(&ctx, width, height);

        if model.bubbles.is_empty() {
            draw_placeholder(&ctx, width, height, "No zones configured");
            return;
        }

        let slots = model.bubbles.len() as f64 + 1.0;
        for bubble in &model.bubbles {
            let x = width * (bubble.rank as f64 + 1.0) / slots;
            let y = height / 2.0;

            ctx.set_fill_style(&bubble.color.bubble.into());
            ctx.begin_path();
            let _ = ctx.arc(x, y, bubble.radius, 0.0, PI * 2.0);
            ctx.fill();

            // Count inside the bubble, zone label along the bottom edge
            ctx.set_fill_style(&"#ffffff".into());
            ctx.set_font("14px sans-serif");
            let _ = ctx.fill_text(&bubble.count.to_string(), x - 8.0, y + 5.0);

            ctx.set_fill_style(&AXIS_COLOR.into());
            ctx.set_font(AXIS_FONT);
            let _ = ctx.fill_text(&bubble.label, x - 20.0, height - 12.0);
        }
    }
}
