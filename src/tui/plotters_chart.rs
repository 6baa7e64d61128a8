//! Plotters-powered fit chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - nicer axis + mesh rendering
//! - built-in series legend
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::Chart;

/// Line color for the fitted curve.
const CURVE_COLOR: RGBColor = RGBColor(255, 80, 80);
/// Marker color for the observed points.
const POINTS_COLOR: RGBColor = RGBColor(80, 160, 255);

/// Render-only widget over a prepared [`Chart`].
///
/// All series and bounds are computed before rendering; `render()` only draws.
pub struct FitPlottersChart<'a> {
    pub chart: &'a Chart,
    /// Formatting of tick labels.
    pub fmt_x: fn(f64) -> String,
    pub fmt_y: fn(f64) -> String,
}

impl<'a> Widget for FitPlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a chart.
        // In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.chart.x_bounds;
        let [y0, y1] = self.chart.y_bounds;

        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let chart = self.chart;
        let widget = widget_fn(move |root| {
            let mut ctx = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 6)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            ctx.configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(chart.x_label)
                .y_desc(chart.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| (self.fmt_x)(*v))
                .y_label_formatter(&|v| (self.fmt_y)(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            ctx.draw_series(LineSeries::new(chart.curve.iter().copied(), &CURVE_COLOR))?
                .label(chart.curve_label)
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 8, y)], CURVE_COLOR));

            // `Circle` radii are mis-scaled by the ratatui backend; `Cross` is
            // drawn from plain line segments and maps correctly.
            ctx.draw_series(
                chart
                    .points
                    .iter()
                    .map(|&(x, y)| Cross::new((x, y), 1, POINTS_COLOR)),
            )?
            .label(chart.points_label)
            .legend(|(x, y)| Cross::new((x + 4, y), 1, POINTS_COLOR));

            ctx.configure_series_labels()
                .position(SeriesLabelPosition::UpperLeft)
                .label_font(("sans-serif", 10).into_font().color(&WHITE))
                .border_style(&WHITE)
                .draw()?;

            Ok(())
        });

        widget.render(area, buf);
    }
}
