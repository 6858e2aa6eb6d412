// File: crates/chart-core/src/model.rs
// Summary: Declarative drawing model produced by a render pass and consumed by backends.

use crate::animation::AnimationPlan;
use crate::axis::Tick;
use crate::geometry::{Path, Point};
use crate::theme::{Color, Theme};
use crate::types::DrawSurface;

/// Straight stroke, used for axis lines, tick marks and gridlines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub color: Color,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// Baseline anchor point.
    pub at: Point,
    pub text: String,
    pub anchor: TextAnchor,
    pub color: Color,
    pub size: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisLayer {
    pub axis_lines: Vec<Segment>,
    pub tick_marks: Vec<Segment>,
    pub gridlines: Vec<Segment>,
    pub labels: Vec<Label>,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineShape {
    pub path: Path,
    pub color: Color,
    pub width: f32,
    /// Stroke length in pixels, drives the progressive-draw animation.
    pub length: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AreaShape {
    pub path: Path,
    pub color: Color,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub center: Point,
    pub radius: f32,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
}

/// Everything needed to draw one chart; owns no backend resources.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawingModel {
    pub surface: DrawSurface,
    pub theme: Theme,
    pub axes: Option<AxisLayer>,
    pub area: Option<AreaShape>,
    pub line: Option<LineShape>,
    pub markers: Vec<Marker>,
    pub animation: Option<AnimationPlan>,
}

impl DrawingModel {
    /// Blank surface; what an empty series renders to.
    pub fn empty(surface: DrawSurface, theme: Theme) -> Self {
        Self { surface, theme, axes: None, area: None, line: None, markers: Vec::new(), animation: None }
    }

    pub fn is_empty(&self) -> bool {
        self.axes.is_none() && self.area.is_none() && self.line.is_none() && self.markers.is_empty()
    }

    /// Marker centers in series order.
    pub fn point_positions(&self) -> Vec<Point> {
        self.markers.iter().map(|m| m.center).collect()
    }
}
