// File: crates/chart-core/src/axis.rs
// Summary: Axis tick placement and labels for the time (X) and value (Y) axes.

use crate::format::{format_magnitude, short_date};
use crate::grid::{linspace, spread_indices};
use crate::scale::{TimeScale, ValueScale};
use crate::series::TimeSeriesPoint;

/// Most X ticks a chart shows.
pub const MAX_X_TICKS: usize = 5;
/// Y tick intervals; one more tick is added for the upper boundary.
pub const Y_TICK_INTERVALS: usize = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// Domain value: epoch millis on X, metric value on Y.
    pub value: f64,
    /// Pixel position along the axis.
    pub position: f32,
    pub label: String,
}

/// X ticks sit on data points, spread evenly by index and labelled with short dates.
pub fn x_ticks(points: &[TimeSeriesPoint], scale: &TimeScale) -> Vec<Tick> {
    spread_indices(points.len(), MAX_X_TICKS)
        .into_iter()
        .map(|i| {
            let p = &points[i];
            Tick { value: p.x(), position: scale.to_px(p.x()), label: short_date(&p.timestamp) }
        })
        .collect()
}

/// Evenly spaced Y ticks from the scale minimum to maximum, inclusive.
pub fn y_ticks(scale: &ValueScale) -> Vec<Tick> {
    linspace(scale.vmin, scale.vmax, Y_TICK_INTERVALS + 1)
        .into_iter()
        .map(|v| Tick { value: v, position: scale.to_px(v), label: format_magnitude(v) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn daily(values: &[f64]) -> Vec<TimeSeriesPoint> {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| TimeSeriesPoint::new(t0 + Duration::days(i as i64), *v))
            .collect()
    }

    #[test]
    fn x_ticks_capped_at_five() {
        let pts = daily(&[1.0; 30]);
        let scale = TimeScale::new(40.0, 540.0, pts[0].x(), pts[29].x());
        let ticks = x_ticks(&pts, &scale);
        assert_eq!(ticks.len(), 5);
        assert_eq!(ticks[0].label, "Jan 1");
        assert_eq!(ticks[0].position, 40.0);
        assert_eq!(ticks[4].label, "Jan 30");
        assert_eq!(ticks[4].position, 580.0);
    }

    #[test]
    fn y_ticks_six_including_bounds() {
        let scale = ValueScale::new_linear(20.0, 170.0, 0.0, 5_000.0);
        let ticks = y_ticks(&scale);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["0", "1.0K", "2.0K", "3.0K", "4.0K", "5.0K"]);
        assert_eq!(ticks[0].position, 170.0);
        assert_eq!(ticks[5].position, 20.0);
    }

    fn labels(scale: &ValueScale) -> Vec<String> {
        y_ticks(scale).into_iter().map(|t| t.label).collect()
    }

    #[test]
    fn flat_domain_ticks_straddle_value() {
        let scale = ValueScale::new_linear(20.0, 170.0, 100.0, 100.0);
        let ticks = y_ticks(&scale);
        assert_eq!(ticks.len(), 6);
        assert!((ticks[0].value - 90.0).abs() < 1e-9);
        assert!((ticks[5].value - 110.0).abs() < 1e-9);
        assert_eq!(labels(&scale), ["90", "94", "98", "102", "106", "110"]);
    }

    #[test]
    fn flat_domain_labels_are_distinct() {
        let big = ValueScale::new_linear(20.0, 170.0, 5_000.0, 5_000.0);
        assert_eq!(labels(&big), ["4.5K", "4.7K", "4.9K", "5.1K", "5.3K", "5.5K"]);
        let zero = ValueScale::new_linear(20.0, 170.0, 0.0, 0.0);
        assert_eq!(labels(&zero), ["-5", "-3", "-1", "1", "3", "5"]);
    }
}
