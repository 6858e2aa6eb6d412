// File: crates/chart-core/src/metrics.rs
// Summary: Derived dashboard metrics (growth, aggregates, engagement, shares, trends).
// Notes:
// - Every function here is total: missing inputs are coerced to zero or a
//   neutral result instead of producing NaN or infinity.

use serde::{Deserialize, Serialize};

use crate::format::{format_growth_badge, format_magnitude, format_signed_percent};
use crate::series::TimeSeriesPoint;

/// Relative change from `first` to `last`, in percent. A zero baseline yields 0.
pub fn growth_percent(first: f64, last: f64) -> f64 {
    if first == 0.0 {
        return 0.0;
    }
    (last - first) / first * 100.0
}

fn present(v: Option<f64>) -> f64 {
    v.filter(|x| !x.is_nan()).unwrap_or(0.0)
}

/// Sum where missing or NaN entries count as zero.
pub fn aggregate_sum<I>(values: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    values.into_iter().map(present).sum()
}

/// Mean where missing entries count as zero; `None` when there is nothing to average.
pub fn average<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(s, c), v| (s + present(v), c + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Likes per view, in percent. Missing or zero views count as one view.
pub fn engagement_rate(likes: Option<f64>, views: Option<f64>) -> f64 {
    let views = present(views);
    let views = if views == 0.0 { 1.0 } else { views };
    present(likes) / views * 100.0
}

/// Rounded share of `part` in `total`, in whole percent; 0 for an empty total.
pub fn share_percent(part: Option<f64>, total: f64) -> i64 {
    if total == 0.0 || !total.is_finite() {
        return 0;
    }
    (present(part) / total * 100.0).round() as i64
}

/// Whole-percent split of `total` across `parts` that always closes to 100.
/// Every part but the last is rounded; the last takes the remainder (never
/// below 0). An empty total yields all zeroes.
pub fn closed_shares<I>(parts: I, total: f64) -> Vec<i64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut shares: Vec<i64> = parts.into_iter().map(|p| share_percent(p, total)).collect();
    if total == 0.0 || !total.is_finite() {
        return shares;
    }
    if let Some((last, rest)) = shares.split_last_mut() {
        *last = (100 - rest.iter().sum::<i64>()).max(0);
    }
    shares
}

/// Growth between the first and last point. `None` when there are fewer than
/// two points or the first value is zero, so callers can say "not enough data".
pub fn series_trend(points: &[TimeSeriesPoint]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    let first = present(Some(points[0].value));
    let last = present(points.last().map(|p| p.value));
    (first != 0.0).then(|| growth_percent(first, last))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    pub fn of_change(change: f64) -> Self {
        if change > 0.0 {
            Trend::Up
        } else if change < 0.0 {
            Trend::Down
        } else {
            Trend::Neutral
        }
    }
}

/// A value paired with its value from the previous period.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub value: f64,
    pub previous_value: Option<f64>,
}

impl MetricSnapshot {
    pub fn new(value: f64, previous_value: Option<f64>) -> Self {
        Self { value, previous_value }
    }

    /// Last point against second-to-last.
    pub fn from_latest(points: &[TimeSeriesPoint]) -> Option<Self> {
        let (last, rest) = points.split_last()?;
        Some(Self { value: last.value, previous_value: rest.last().map(|p| p.value) })
    }

    pub fn change(&self) -> f64 {
        self.previous_value.map_or(0.0, |prev| growth_percent(prev, self.value))
    }

    pub fn trend(&self) -> Trend { Trend::of_change(self.change()) }
    pub fn value_label(&self) -> String { format_magnitude(self.value) }
    pub fn change_label(&self) -> String { format_signed_percent(self.change()) }
}

/// Headline numbers shown above a chart card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartSummary {
    pub latest_value: f64,
    pub growth_percent: f64,
}

impl ChartSummary {
    pub fn from_series(points: &[TimeSeriesPoint]) -> Self {
        let latest_value = points.last().map_or(0.0, |p| p.value);
        let growth = match points {
            [first, .., last] => growth_percent(first.value, last.value),
            _ => 0.0,
        };
        Self { latest_value, growth_percent: growth }
    }

    pub fn is_positive(&self) -> bool { self.growth_percent >= 0.0 }
    pub fn latest_label(&self) -> String { format_magnitude(self.latest_value) }
    pub fn growth_label(&self) -> String { format_signed_percent(self.growth_percent) }
    pub fn growth_badge(&self) -> String { format_growth_badge(self.growth_percent) }
}

/// Latest counters from one connected platform; absent fields were not reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformCounts {
    pub followers: Option<f64>,
    pub likes: Option<f64>,
    pub views: Option<f64>,
}

/// Cross-platform totals for the overview cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformTotals {
    pub followers: f64,
    pub likes: f64,
    pub views: f64,
}

impl PlatformTotals {
    pub fn from_platforms(platforms: &[PlatformCounts]) -> Self {
        Self {
            followers: aggregate_sum(platforms.iter().map(|p| p.followers)),
            likes: aggregate_sum(platforms.iter().map(|p| p.likes)),
            views: aggregate_sum(platforms.iter().map(|p| p.views)),
        }
    }

    /// Each platform's share of total followers, in whole percent, summing to 100.
    pub fn follower_shares(&self, platforms: &[PlatformCounts]) -> Vec<i64> {
        closed_shares(platforms.iter().map(|p| p.followers), self.followers)
    }
}
