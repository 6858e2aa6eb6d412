// File: crates/chart-core/src/format.rs
// Summary: Display formatting for card values, tick labels and percentages.

use chrono::{DateTime, Utc};

/// Shown in place of a value that is missing or not a number.
pub const PLACEHOLDER: &str = "-";

/// Fixed-point rendering that rounds ties away from zero.
pub fn to_fixed(x: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    let rounded = (x * scale).round() / scale;
    let s = format!("{:.*}", digits, rounded);
    // "-0" / "-0.0" read as noise on a dashboard
    if rounded == 0.0 && s.starts_with('-') {
        s[1..].to_string()
    } else {
        s
    }
}

/// Compact a number with K/M suffixes: `1500 -> "1.5K"`, `2_500_000 -> "2.5M"`,
/// `999 -> "999"`. Missing or non-finite input yields [`PLACEHOLDER`].
pub fn format_magnitude(n: impl Into<Option<f64>>) -> String {
    let Some(n) = n.into().filter(|v| v.is_finite()) else {
        return PLACEHOLDER.to_string();
    };
    if n >= 1_000_000.0 {
        format!("{}M", to_fixed(n / 1_000_000.0, 1))
    } else if n >= 1_000.0 {
        format!("{}K", to_fixed(n / 1_000.0, 1))
    } else {
        to_fixed(n, 0)
    }
}

/// `+12.3%`, `-4.0%`, `0.0%`.
pub fn format_signed_percent(change: f64) -> String {
    if !change.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let sign = if change > 0.0 { "+" } else { "" };
    format!("{sign}{}%", to_fixed(change, 1))
}

/// Arrow plus absolute change: `↑ 50.0%` for growth (including zero), `↓ 12.5%` otherwise.
pub fn format_growth_badge(change: f64) -> String {
    if !change.is_finite() {
        return PLACEHOLDER.to_string();
    }
    let arrow = if change >= 0.0 { '↑' } else { '↓' };
    format!("{arrow} {}%", to_fixed(change.abs(), 1))
}

/// Short axis date, e.g. `Jan 5`.
pub fn short_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn magnitude_suffixes() {
        assert_eq!(format_magnitude(999.0), "999");
        assert_eq!(format_magnitude(1500.0), "1.5K");
        assert_eq!(format_magnitude(2_500_000.0), "2.5M");
        assert_eq!(format_magnitude(1_000.0), "1.0K");
        assert_eq!(format_magnitude(1_250.0), "1.3K");
        assert_eq!(format_magnitude(12.6), "13");
        assert_eq!(format_magnitude(-0.2), "0");
        assert_eq!(format_magnitude(-1_500.0), "-1500");
    }

    #[test]
    fn magnitude_placeholder_for_missing() {
        assert_eq!(format_magnitude(None), PLACEHOLDER);
        assert_eq!(format_magnitude(f64::NAN), PLACEHOLDER);
        assert_eq!(format_magnitude(f64::INFINITY), PLACEHOLDER);
    }

    #[test]
    fn percent_labels() {
        assert_eq!(format_signed_percent(50.0), "+50.0%");
        assert_eq!(format_signed_percent(-12.345), "-12.3%");
        assert_eq!(format_signed_percent(0.0), "0.0%");
        assert_eq!(format_growth_badge(50.0), "↑ 50.0%");
        assert_eq!(format_growth_badge(-12.5), "↓ 12.5%");
        assert_eq!(format_growth_badge(f64::NAN), PLACEHOLDER);
    }

    #[test]
    fn short_dates() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 5, 13, 0, 0).unwrap();
        assert_eq!(short_date(&ts), "Jan 5");
    }
}
