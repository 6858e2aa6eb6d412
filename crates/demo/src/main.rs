// File: crates/demo/src/main.rs
// Summary: Demo loads a metric history (CSV or JSON records) and renders a chart card to SVG + PNG.

use anyhow::{Context, Result};
use serde_json::Value;
use socialsync_chart::series::parse_timestamp;
use socialsync_chart::{render, ChartOptions, ChartSummary, Color, MetricSnapshot, TimeSeries, TimeSeriesPoint};
use socialsync_chart::theme;
use socialsync_chart_skia::SkiaRenderer;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Chart settings read from the environment.
struct DemoConfig {
    options: ChartOptions,
}

impl DemoConfig {
    fn from_env() -> Result<Self> {
        let mut options = ChartOptions::default();
        if let Ok(name) = std::env::var("CHART_THEME") {
            options.theme = theme::find(&name);
        }
        if let Ok(w) = std::env::var("CHART_WIDTH") {
            let w: u32 = w.trim().parse().with_context(|| format!("CHART_WIDTH must be a pixel count, got '{w}'"))?;
            options = options.with_width(w);
        }
        if let Ok(c) = std::env::var("CHART_COLOR") {
            options.color = c.parse::<Color>()?;
        }
        if std::env::var_os("CHART_NO_ANIMATE").is_some() {
            options.animate = false;
        }
        Ok(Self { options })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("socialsync=info")),
        )
        .with_target(true)
        .init();

    // Accept path (and optional metric field) from CLI or fall back to the bundled sample
    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("data/subscribers.csv"));
    let metric = args.next();

    let config = DemoConfig::from_env()?;
    let series = load_series(&input, metric.as_deref())
        .with_context(|| format!("failed to load series '{}'", input.display()))?;
    info!("Loaded {} points from {}", series.len(), input.display());

    let summary = ChartSummary::from_series(series.points());
    info!(
        latest = %summary.latest_label(),
        growth = %summary.growth_label(),
        badge = %summary.growth_badge(),
        "chart card"
    );
    if let Some(snap) = MetricSnapshot::from_latest(series.points()) {
        info!(change = %snap.change_label(), trend = ?snap.trend(), "vs previous period");
    }

    let model = render(series.points(), &config.options);

    let out_svg = out_name_with(&input, "svg");
    model.write_svg(&out_svg)?;
    info!("Wrote {}", out_svg.display());

    let out_png = out_name_with(&input, "png");
    SkiaRenderer::default().render_to_png(&model, &out_png)?;
    info!("Wrote {}", out_png.display());

    Ok(())
}

/// Produce output file name like target/out/chart_<stem>.<ext>
fn out_name_with(input: &Path, ext: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("chart_{stem}.{ext}"))
}

fn load_series(path: &Path, metric: Option<&str>) -> Result<TimeSeries> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "json" => load_json(path, metric),
        _ => load_csv(path, metric),
    }
}

/// JSON body as returned by the backend: an array of records.
fn load_json(path: &Path, metric: Option<&str>) -> Result<TimeSeries> {
    let text = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
    let body: Value = serde_json::from_str(&text).context("parsing JSON")?;
    let records = body.as_array().context("expected a JSON array of records")?;
    let metric = metric.unwrap_or("value");
    Ok(TimeSeries::from_records(records, metric)?)
}

/// CSV with a date-like column and a value column (named `metric`, else the second column).
fn load_csv(path: &Path, metric: Option<&str>) -> Result<TimeSeries> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let i_time = headers
        .iter()
        .position(|h| matches!(h.as_str(), "date" | "timestamp" | "last_updated" | "time"))
        .context("no date/timestamp column")?;
    let i_value = match metric {
        Some(m) => headers.iter().position(|h| h == &m.to_lowercase()).with_context(|| format!("no '{m}' column"))?,
        None => (0..headers.len()).find(|&i| i != i_time).context("no value column")?,
    };

    let mut points = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let Some(timestamp) = rec.get(i_time).and_then(parse_timestamp) else {
            warn!(row, "skipping row without a readable timestamp");
            continue;
        };
        // missing metric counts as zero
        let value = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(0.0);
        points.push(TimeSeriesPoint::new(timestamp, value));
    }
    Ok(TimeSeries::new(points))
}
