// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports chart layout, SVG export and dashboard metrics.

pub mod animation;
pub mod axis;
pub mod chart;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod metrics;
pub mod model;
pub mod scale;
pub mod series;
pub mod svg;
pub mod theme;
pub mod types;

pub use animation::{AnimationPlan, FrameState};
pub use chart::{render, ChartOptions, LineChart};
pub use error::SeriesError;
pub use format::{format_growth_badge, format_magnitude, format_signed_percent, PLACEHOLDER};
pub use metrics::{
    aggregate_sum, average, closed_shares, engagement_rate, growth_percent, series_trend, share_percent, ChartSummary,
    MetricSnapshot, PlatformCounts, PlatformTotals, Trend,
};
pub use model::DrawingModel;
pub use series::{TimeSeries, TimeSeriesPoint};
pub use theme::{Color, Theme};
pub use types::{DrawSurface, Insets};
