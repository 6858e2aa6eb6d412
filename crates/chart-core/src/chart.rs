// File: crates/chart-core/src/chart.rs
// Summary: Line chart options and the pure render pass (series -> DrawingModel).

use tracing::debug;

use crate::animation::AnimationPlan;
use crate::axis::{x_ticks, y_ticks};
use crate::geometry::{Path, Point};
use crate::model::{AreaShape, AxisLayer, DrawingModel, Label, LineShape, Marker, Segment, TextAnchor};
use crate::scale::{TimeScale, ValueScale};
use crate::series::{Bounds, TimeSeriesPoint};
use crate::theme::{Color, Theme};
use crate::types::DrawSurface;

/// Default series color (`#3B82F6`).
pub const DEFAULT_COLOR: Color = Color::rgb(0x3b, 0x82, 0xf6);

const TICK_LEN: f32 = 5.0;
const LABEL_SIZE: f32 = 10.0;
const AREA_OPACITY: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartOptions {
    pub surface: DrawSurface,
    pub color: Color,
    pub theme: Theme,
    pub show_axis: bool,
    pub animate: bool,
    pub line_width: f32,
    pub marker_radius: f32,
    pub marker_stroke_width: f32,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            surface: DrawSurface::default(),
            color: DEFAULT_COLOR,
            theme: Theme::light(),
            show_axis: true,
            animate: true,
            line_width: 2.0,
            marker_radius: 3.0,
            marker_stroke_width: 1.5,
        }
    }
}

impl ChartOptions {
    pub fn with_height(mut self, height: u32) -> Self {
        self.surface.height = height;
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.surface.width = width;
        self
    }
}

pub struct LineChart {
    pub options: ChartOptions,
}

impl LineChart {
    pub fn new(options: ChartOptions) -> Self {
        Self { options }
    }

    /// Lay out `points` (ascending by timestamp) on the configured surface.
    ///
    /// Never fails: an empty series yields an empty model, a single instant
    /// sits on the left edge and a flat series on the vertical center.
    pub fn render(&self, points: &[TimeSeriesPoint]) -> DrawingModel {
        let opts = &self.options;
        let surface = opts.surface;
        let Some(bounds) = Bounds::of(points) else {
            debug!("render: empty series, blank surface");
            return DrawingModel::empty(surface, opts.theme);
        };

        let xs = TimeScale::new(surface.plot_left(), surface.inner_width(), bounds.x_min, bounds.x_max);
        let ys = ValueScale::new_linear(surface.plot_top(), surface.plot_bottom(), bounds.y_min, bounds.y_max);
        debug!(
            points = points.len(),
            single_instant = xs.is_degenerate(),
            flat = ys.is_flat(),
            "render: line chart"
        );

        let pixels: Vec<Point> = points
            .iter()
            .map(|p| Point::new(xs.to_px(p.x()), ys.to_px(p.value)))
            .collect();

        let line_path = Path::polyline(&pixels);
        let length = line_path.length();

        let baseline = ys.to_px(bounds.y_min);
        let mut area_path = line_path.clone();
        if let (Some(first), Some(last)) = (pixels.first(), pixels.last()) {
            area_path
                .line_to(Point::new(last.x, baseline))
                .line_to(Point::new(first.x, baseline))
                .close();
        }

        let markers = pixels
            .iter()
            .map(|&center| Marker {
                center,
                radius: opts.marker_radius,
                fill: opts.theme.marker_fill,
                stroke: opts.color,
                stroke_width: opts.marker_stroke_width,
            })
            .collect();

        DrawingModel {
            surface,
            theme: opts.theme,
            axes: opts.show_axis.then(|| build_axes(points, &xs, &ys, &surface, &opts.theme)),
            area: Some(AreaShape { path: area_path, color: opts.color, opacity: AREA_OPACITY }),
            line: Some(LineShape { path: line_path, color: opts.color, width: opts.line_width, length }),
            markers,
            animation: opts.animate.then(|| AnimationPlan::for_line(length)),
        }
    }
}

/// Convenience wrapper over [`LineChart::render`].
pub fn render(points: &[TimeSeriesPoint], options: &ChartOptions) -> DrawingModel {
    LineChart::new(*options).render(points)
}

// ---- helpers ----------------------------------------------------------------

fn build_axes(
    points: &[TimeSeriesPoint],
    xs: &TimeScale,
    ys: &ValueScale,
    surface: &DrawSurface,
    theme: &Theme,
) -> AxisLayer {
    let (l, t, r, b) = (surface.plot_left(), surface.plot_top(), surface.plot_right(), surface.plot_bottom());
    let seg = |from: Point, to: Point, color: Color| Segment { from, to, color, width: 1.0 };
    let label = |at: Point, text: String, anchor: TextAnchor| Label {
        at,
        text,
        anchor,
        color: theme.axis_label,
        size: LABEL_SIZE,
    };

    let mut layer = AxisLayer {
        x_ticks: x_ticks(points, xs),
        y_ticks: y_ticks(ys),
        ..AxisLayer::default()
    };

    // X and Y axis lines
    layer.axis_lines.push(seg(Point::new(l, b), Point::new(r, b), theme.axis_line));
    layer.axis_lines.push(seg(Point::new(l, t), Point::new(l, b), theme.axis_line));

    for tick in &layer.x_ticks {
        let x = tick.position;
        layer.tick_marks.push(seg(Point::new(x, b), Point::new(x, b + TICK_LEN), theme.tick));
        layer.labels.push(label(Point::new(x, b + 20.0), tick.label.clone(), TextAnchor::Middle));
    }

    for tick in &layer.y_ticks {
        let y = tick.position;
        layer.tick_marks.push(seg(Point::new(l, y), Point::new(l - TICK_LEN, y), theme.tick));
        layer.gridlines.push(seg(Point::new(l, y), Point::new(r, y), theme.grid));
        layer.labels.push(label(Point::new(l - 10.0, y + 3.0), tick.label.clone(), TextAnchor::End));
    }

    layer
}
