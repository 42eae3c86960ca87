//! Time-Series Chart
//!
//! Canvas line chart for per-zone occupancy over the snapshot history.
//! One line per zone, with the area under each line filled at reduced
//! opacity.

use web_sys::HtmlCanvasElement;

use crate::render::LineChartModel;

use super::{clear, context_2d, draw_placeholder, ChartView, AXIS_COLOR, AXIS_FONT, GRID_COLOR};

/// Canvas-backed line chart. Holds only the canvas handle; every update
/// repaints from scratch.
pub struct CanvasLineChart {
    canvas: HtmlCanvasElement,
}

impl CanvasLineChart {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl ChartView for CanvasLineChart {
    type Model = LineChartModel;

    fn update(&self, model: &LineChartModel) {
        let ctx = match context_2d(&self.canvas) {
            Some(ctx) => ctx,
            None => return,
        };

        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;

        let margin_left = 60.0;
        let margin_right = 20.0;
        let margin_top = 20.0;
        let margin_bottom = 40.0;

        let chart_width = width - margin_left - margin_right;
        let chart_height = height - margin_top - margin_bottom;

        clear(&ctx, width, height);

        // Y-axis starts at zero so occupancy stays comparable across redraws
        let max_count = model
            .series
            .iter()
            .flat_map(|series| series.points.iter().copied())
            .max()
            .unwrap_or(0);
        let y_max = f64::from(max_count.max(1)) * 1.1;

        // Grid lines and y labels
        ctx.set_line_width(1.0);
        for i in 0..=5 {
            let y = margin_top + (i as f64 / 5.0) * chart_height;

            ctx.set_stroke_style(&GRID_COLOR.into());
            ctx.begin_path();
            ctx.move_to(margin_left, y);
            ctx.line_to(width - margin_right, y);
            ctx.stroke();

            let value = y_max - (i as f64 / 5.0) * y_max;
            ctx.set_fill_style(&AXIS_COLOR.into());
            ctx.set_font(AXIS_FONT);
            let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
        }

        let points_len = model.labels.len();
        if points_len == 0 || model.series.is_empty() {
            draw_placeholder(&ctx, width, height, "Waiting for history...");
            return;
        }

        let x_step = if points_len > 1 {
            chart_width / (points_len - 1) as f64
        } else {
            0.0
        };
        let x_at = |i: usize| margin_left + x_step * i as f64;
        let y_at = |count: u32| margin_top + (1.0 - f64::from(count) / y_max) * chart_height;

        for series in &model.series {
            if series.points.is_empty() {
                continue;
            }

            // Area under the line
            ctx.set_fill_style(&series.color.fill.into());
            ctx.begin_path();
            ctx.move_to(x_at(0), y_at(series.points[0]));
            for (i, count) in series.points.iter().enumerate().skip(1) {
                ctx.line_to(x_at(i), y_at(*count));
            }
            ctx.line_to(x_at(series.points.len() - 1), margin_top + chart_height);
            ctx.line_to(x_at(0), margin_top + chart_height);
            ctx.close_path();
            ctx.fill();

            // Line on top
            ctx.set_stroke_style(&series.color.stroke.into());
            ctx.set_line_width(2.0);
            ctx.begin_path();
            for (i, count) in series.points.iter().enumerate() {
                if i == 0 {
                    ctx.move_to(x_at(i), y_at(*count));
                } else {
                    ctx.line_to(x_at(i), y_at(*count));
                }
            }
            ctx.stroke();
        }

        // X labels, subsampled to stay readable over a 50-entry window
        let label_step = (points_len / 6).max(1);
        ctx.set_fill_style(&AXIS_COLOR.into());
        ctx.set_font(AXIS_FONT);
        for (i, label) in model.labels.iter().enumerate() {
            if i % label_step != 0 {
                continue;
            }
            let _ = ctx.fill_text(label, x_at(i) - 20.0, height - 10.0);
        }
    }
}
