// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden SVG snapshots with bless flow.
// Behavior:
// - Renders deterministic charts to SVG text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chrono::{Duration, TimeZone, Utc};
use socialsync_chart::geometry::fmt_num;
use socialsync_chart::{render, ChartOptions, Theme, TimeSeriesPoint};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, got: &str) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, got).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), got.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read_to_string(&path).expect("read snapshot");
        assert_eq!(got, want, "SVG differs from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn weekly(values: &[f64]) -> Vec<TimeSeriesPoint> {
    let t0 = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| TimeSeriesPoint::new(t0 + Duration::days(7 * i as i64), *v))
        .collect()
}

#[test]
fn golden_followers_light() {
    let pts = weekly(&[1200.0, 1350.0, 1325.0, 1600.0, 1710.0, 2050.0]);
    let svg = render(&pts, &ChartOptions::default()).to_svg();
    write_or_compare("followers_light.svg", &svg);
}

#[test]
fn entry_animation_markup() {
    let pts = weekly(&[1200.0, 1350.0, 1325.0, 1600.0, 1710.0, 2050.0]);
    let model = render(&pts, &ChartOptions::default());
    let plan = model.animation.expect("animated by default");
    let svg = model.to_svg();
    let len = fmt_num(plan.line_length);

    // line: dashed to its full length, drawn in over 1s while fading in over 0.3s
    assert!(svg.contains(&format!(r#"stroke-dasharray="{len}" stroke-dashoffset="{len}" opacity="0">"#)));
    assert!(svg.contains(&format!(
        r#"<animate attributeName="stroke-dashoffset" from="{len}" to="0" begin="0s" dur="1s" fill="freeze"/>"#
    )));
    assert!(svg.contains(r#"<animate attributeName="opacity" from="0" to="1" begin="0s" dur="0.3s" fill="freeze"/></path>"#));

    // area fades in over 1s
    assert!(svg.contains(
        r#"stroke="none" opacity="0"><animate attributeName="opacity" from="0" to="1" begin="0s" dur="1s" fill="freeze"/></path>"#
    ));

    // markers wait for the line to finish
    let marker_fade = r#"<animate attributeName="opacity" from="0" to="1" begin="1s" dur="0.3s" fill="freeze"/></circle>"#;
    assert_eq!(svg.matches(marker_fade).count(), pts.len());

    // line, area and every marker start hidden
    assert_eq!(svg.matches(r#"opacity="0">"#).count(), pts.len() + 2);
}

#[test]
fn golden_views_dark_static() {
    let pts = weekly(&[2_400_000.0, 2_100_000.0, 2_900_000.0]);
    let opts = ChartOptions { theme: Theme::dark(), animate: false, ..ChartOptions::default() };
    let svg = render(&pts, &opts).to_svg();
    assert!(!svg.contains("<animate"));
    assert!(svg.contains("fill=\"#111827\""));
    write_or_compare("views_dark_static.svg", &svg);
}

#[test]
fn svg_writes_to_disk() {
    let pts = weekly(&[1.0, 2.0]);
    let out = std::path::PathBuf::from("target/test_out/two_points.svg");
    render(&pts, &ChartOptions::default()).write_svg(&out).expect("write svg");
    let text = std::fs::read_to_string(&out).expect("svg exists");
    assert!(text.starts_with("<svg"));
}
