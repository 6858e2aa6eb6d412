// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end raster smoke test writing a PNG.

use chrono::{Duration, TimeZone, Utc};
use socialsync_chart::{render, ChartOptions, DrawingModel, TimeSeriesPoint};
use socialsync_chart_skia::{RasterOptions, SkiaRenderer};

fn model() -> DrawingModel {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let pts: Vec<TimeSeriesPoint> = [100.0, 180.0, 140.0, 260.0]
        .iter()
        .enumerate()
        .map(|(i, v)| TimeSeriesPoint::new(t0 + Duration::days(i as i64), *v))
        .collect();
    render(&pts, &ChartOptions::default())
}

#[test]
fn render_smoke_png() {
    let renderer = SkiaRenderer::new(RasterOptions { draw_labels: false, ..RasterOptions::default() });
    let bytes = renderer.render_to_png_bytes(&model()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (600, 200));

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    renderer.render_to_png(&model(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn first_frame_differs_from_settled_chart() {
    let m = model();
    let settled = SkiaRenderer::new(RasterOptions { draw_labels: false, ..RasterOptions::default() });
    let first = SkiaRenderer::new(RasterOptions { draw_labels: false, time: Some(0.0), ..RasterOptions::default() });
    let a = image::load_from_memory(&settled.render_to_png_bytes(&m).unwrap()).unwrap().to_rgba8();
    let b = image::load_from_memory(&first.render_to_png_bytes(&m).unwrap()).unwrap().to_rgba8();
    assert_ne!(a.as_raw(), b.as_raw());
}

#[test]
fn empty_model_still_rasterizes() {
    let m = render(&[], &ChartOptions::default());
    let bytes = SkiaRenderer::default().render_to_png_bytes(&m).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn scale_multiplies_surface() {
    let renderer = SkiaRenderer::new(RasterOptions { scale: 2.0, draw_labels: false, ..RasterOptions::default() });
    let bytes = renderer.render_to_png_bytes(&model()).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (1200, 400));
}

#[test]
fn unwritable_target_reports_path() {
    // a regular file cannot act as a parent directory
    let blocker = std::path::PathBuf::from("target/test_out/not_a_dir");
    std::fs::create_dir_all("target/test_out").expect("mkdir");
    std::fs::write(&blocker, b"x").expect("write blocker");
    let err = SkiaRenderer::default()
        .render_to_png(&model(), blocker.join("chart.png"))
        .expect_err("parent is a file");
    assert!(format!("{err:#}").contains("not_a_dir"), "{err:#}");
}
