// File: crates/chart-core/src/series.rs
// Summary: Time series model for one dashboard metric plus ingestion of API records.
// Notes:
// - Points are kept in ascending timestamp order; duplicates are allowed.
// - A missing metric field counts as zero. A missing timestamp is an error the
//   caller is expected to filter out before rendering.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SeriesError;

/// Keys checked, in order, for the instant of a record.
pub const TIMESTAMP_KEYS: [&str; 3] = ["date", "timestamp", "last_updated"];

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Timestamp on the numeric X domain (epoch milliseconds).
    #[inline]
    pub fn x(&self) -> f64 {
        self.timestamp.timestamp_millis() as f64
    }
}

/// Min/max of a non-empty series on both axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn of(points: &[TimeSeriesPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut b = Self { x_min: first.x(), x_max: first.x(), y_min: first.value, y_max: first.value };
        for p in &points[1..] {
            b.x_min = b.x_min.min(p.x());
            b.x_max = b.x_max.max(p.x());
            b.y_min = b.y_min.min(p.value);
            b.y_max = b.y_max.max(p.value);
        }
        Some(b)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    /// Build a series, sorting by timestamp (stable, so equal instants keep input order).
    pub fn new(mut points: Vec<TimeSeriesPoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);
        Self { points }
    }

    /// Build a series from decoded API records, reading `metric` as the value field.
    pub fn from_records(records: &[Value], metric: &str) -> Result<Self, SeriesError> {
        let mut points = Vec::with_capacity(records.len());
        for (index, rec) in records.iter().enumerate() {
            let obj = rec.as_object().ok_or(SeriesError::NotAnObject { index })?;
            let raw = TIMESTAMP_KEYS
                .iter()
                .find_map(|k| obj.get(*k).filter(|v| !v.is_null()))
                .ok_or(SeriesError::MissingTimestamp { index })?;
            let timestamp = timestamp_from_json(raw).ok_or_else(|| SeriesError::InvalidTimestamp {
                index,
                raw: raw.to_string(),
            })?;
            let value = obj.get(metric).map(number_or_zero).unwrap_or(0.0);
            points.push(TimeSeriesPoint { timestamp, value });
        }
        Ok(Self::new(points))
    }

    pub fn points(&self) -> &[TimeSeriesPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn first(&self) -> Option<&TimeSeriesPoint> { self.points.first() }
    pub fn latest(&self) -> Option<&TimeSeriesPoint> { self.points.last() }
    pub fn bounds(&self) -> Option<Bounds> { Bounds::of(&self.points) }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }
}

impl AsRef<[TimeSeriesPoint]> for TimeSeries {
    fn as_ref(&self) -> &[TimeSeriesPoint] { &self.points }
}

impl From<Vec<TimeSeriesPoint>> for TimeSeries {
    fn from(points: Vec<TimeSeriesPoint>) -> Self { Self::new(points) }
}

/// Parse the timestamp encodings the dashboard backend emits.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        return epoch_to_utc(n);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| Utc.from_utc_datetime(&ndt))
}

fn epoch_to_utc(n: i64) -> Option<DateTime<Utc>> {
    // epoch ms vs epoch sec
    if n > 10_i64.pow(12) {
        Utc.timestamp_millis_opt(n).single()
    } else {
        Utc.timestamp_opt(n, 0).single()
    }
}

fn timestamp_from_json(v: &Value) -> Option<DateTime<Utc>> {
    match v {
        Value::String(s) => parse_timestamp(s),
        Value::Number(n) => n.as_i64().and_then(epoch_to_utc),
        _ => None,
    }
}

fn number_or_zero(v: &Value) -> f64 {
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|x| x.is_finite()).unwrap_or(0.0)
}
