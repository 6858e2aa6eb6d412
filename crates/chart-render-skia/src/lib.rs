// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer: rasterizes a DrawingModel to PNG using CPU raster surfaces.
// Notes:
// - Animation is sampled at a single instant; with no instant the settled
//   chart is drawn, which matches the non-animated rendering.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use socialsync_chart::geometry::{Path, PathCommand};
use socialsync_chart::model::{Label, Segment, TextAnchor};
use socialsync_chart::{Color, DrawingModel, FrameState};

pub struct RasterOptions {
    /// Device pixel ratio applied to the whole drawing.
    pub scale: f32,
    /// Fill the surface with the theme background first.
    pub background: bool,
    pub draw_labels: bool,
    /// Seconds since the chart mounted; `None` draws the final frame.
    pub time: Option<f32>,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { scale: 1.0, background: true, draw_labels: true, time: None }
    }
}

pub struct SkiaRenderer {
    pub options: RasterOptions,
}

impl SkiaRenderer {
    pub fn new(options: RasterOptions) -> Self { Self { options } }

    /// Render the model into encoded PNG bytes.
    pub fn render_to_png_bytes(&self, model: &DrawingModel) -> Result<Vec<u8>> {
        let s = self.options.scale.max(0.1);
        let w = ((model.surface.width as f32) * s).round().max(1.0) as i32;
        let h = ((model.surface.height as f32) * s).round().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;

        let frame = match (self.options.time, model.animation) {
            (Some(t), Some(plan)) => plan.sample(t),
            _ => FrameState::FINAL,
        };
        debug!(width = w, height = h, ?frame, "skia: rasterizing chart");

        let canvas = surface.canvas();
        if self.options.background {
            canvas.clear(to_skia(model.theme.background, 1.0));
        } else {
            canvas.clear(skia::Color::TRANSPARENT);
        }
        canvas.scale((s, s));

        if let Some(axes) = &model.axes {
            for seg in axes.gridlines.iter().chain(&axes.axis_lines).chain(&axes.tick_marks) {
                draw_segment(canvas, seg);
            }
            if self.options.draw_labels {
                for l in &axes.labels {
                    draw_label(canvas, l);
                }
            }
        }

        if let Some(area) = &model.area {
            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_style(skia::paint::Style::Fill);
            fill.set_color(to_skia(area.color, area.opacity * frame.area_opacity));
            canvas.draw_path(&to_skia_path(&area.path), &fill);
        }

        if let Some(line) = &model.line {
            let mut stroke = skia::Paint::default();
            stroke.set_anti_alias(true);
            stroke.set_style(skia::paint::Style::Stroke);
            stroke.set_stroke_width(line.width);
            stroke.set_stroke_cap(skia::paint::Cap::Round);
            stroke.set_stroke_join(skia::paint::Join::Round);
            stroke.set_color(to_skia(line.color, frame.line_opacity));
            if frame.line_reveal < 1.0 && line.length > 0.0 {
                let dash = [line.length, line.length];
                stroke.set_path_effect(skia::PathEffect::dash(&dash, frame.dash_offset(line.length)));
            }
            canvas.draw_path(&to_skia_path(&line.path), &stroke);
        }

        for m in &model.markers {
            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_style(skia::paint::Style::Fill);
            fill.set_color(to_skia(m.fill, frame.marker_opacity));
            canvas.draw_circle((m.center.x, m.center.y), m.radius, &fill);

            let mut ring = skia::Paint::default();
            ring.set_anti_alias(true);
            ring.set_style(skia::paint::Style::Stroke);
            ring.set_stroke_width(m.stroke_width);
            ring.set_color(to_skia(m.stroke, frame.marker_opacity));
            canvas.draw_circle((m.center.x, m.center.y), m.radius, &ring);
        }

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the model to a PNG at `output_png_path`.
    pub fn render_to_png(&self, model: &DrawingModel, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(model)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(RasterOptions::default()) }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(c: Color, opacity: f32) -> skia::Color {
    let a = (c.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for cmd in &path.commands {
        match *cmd {
            PathCommand::MoveTo(p) => { out.move_to((p.x, p.y)); }
            PathCommand::LineTo(p) => { out.line_to((p.x, p.y)); }
            PathCommand::Close => { out.close(); }
        }
    }
    out
}

fn draw_segment(canvas: &skia::Canvas, seg: &Segment) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_stroke_width(seg.width);
    paint.set_color(to_skia(seg.color, 1.0));
    canvas.draw_line((seg.from.x, seg.from.y), (seg.to.x, seg.to.y), &paint);
}

fn draw_label(canvas: &skia::Canvas, label: &Label) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_color(to_skia(label.color, 1.0));
    let mut font = skia::Font::default();
    font.set_size(label.size);

    let (width, _) = font.measure_str(&label.text, Some(&paint));
    let x = match label.anchor {
        TextAnchor::Start => label.at.x,
        TextAnchor::Middle => label.at.x - width * 0.5,
        TextAnchor::End => label.at.x - width,
    };
    canvas.draw_str(&label.text, (x, label.at.y), &font, &paint);
}
